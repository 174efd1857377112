use super::utils::centered_rect;
use super::widgets::{controls_line, status_badge};
use super::*;
use crate::app::FormFocus;
use crm_core::ClientField;

pub fn render_client_form_dialog(frame: &mut Frame, app: &App) {
    let form = app.directory.form();
    let area = centered_rect(64, 16, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];

    for field in ClientField::ALL {
        let focused = app.form_focus == FormFocus::Field(field);
        let label_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        // The focused field shows the live edit buffer with its cursor
        let value = if focused {
            let (before, after) = app.form_input.split_at_cursor();
            Span::styled(
                format!("{}█{}", before, after),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else if form.field(field).is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                form.field(field).to_string(),
                Style::default().fg(Color::White),
            )
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", field.label()), label_style),
            value,
        ]));
    }

    let status_focused = app.form_focus == FormFocus::Status;
    let status_label = if status_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut status_line = vec![
        Span::styled(format!("{:<10}", "Статус"), status_label),
        status_badge(form.status()),
    ];
    if status_focused {
        status_line.push(Span::styled(
            "  (Пробел: переключить)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(status_line));
    lines.push(Line::from(""));

    if let Some(err) = &app.form_error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(controls_line(&[
        ("Tab", "Следующее поле"),
        ("Enter", form.submit_label()),
        ("Esc", "Отмена"),
    ]));

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", form.title()))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(dialog, area);
}
