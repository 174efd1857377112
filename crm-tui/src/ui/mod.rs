use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Padding, Paragraph, Row, Table, TableState},
    Frame,
};

mod client_form_dialog;
mod directory_view;
mod landing_view;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Landing => landing_view::render_landing_view(frame, app, body),
        View::Directory => directory_view::render_directory_view(frame, app, body),
    }

    render_status_bar(frame, root[2], app);

    // Client dialog renders on top of the directory
    if app.is_form_open() {
        client_form_dialog::render_client_form_dialog(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let section = match app.current_view {
        View::Landing => "Главная",
        View::Directory => "Клиенты",
    };
    let line = Line::from(vec![
        Span::styled(
            " CRM Система",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  /  ", Style::default().fg(Color::DarkGray)),
        Span::styled(section, Style::default().fg(Color::White)),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Toast first, then any status message, otherwise a short hint.
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(toast) = app.directory.notifier().active() {
        Line::from(Span::styled(
            format!(" ✓ {}", toast.message),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            " q: Выход",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Draw one frame and return the screen as plain text rows.
    pub fn render_to_lines(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }
}
