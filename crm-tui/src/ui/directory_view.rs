use super::utils::format_ru_date;
use super::widgets::{controls_line, status_badge};
use super::*;

const SEARCH_PLACEHOLDER: &str = "Поиск по имени, компании или email...";

pub fn render_directory_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // Summary cards
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Client table
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "База клиентов",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Управление клиентской базой компании",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    render_summary_cards(frame, app, chunks[1]);
    render_search_box(frame, app, chunks[2]);
    render_client_table(frame, app, chunks[3]);

    let controls = Paragraph::new(controls_line(&[
        ("/", "Поиск"),
        ("↑↓/j/k", "Выбор"),
        ("a", "Добавить"),
        ("e/Enter", "Изменить"),
        ("d", "Удалить"),
        ("Ctrl+X", "Сбросить поиск"),
        ("Esc", "Главная"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Управление ",
                Style::default().fg(Color::DarkGray),
            )),
    );
    frame.render_widget(controls, chunks[4]);
}

fn render_summary_cards(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.directory.summary();
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        (
            "Всего клиентов",
            summary.total,
            Color::White,
            "в базе данных".to_string(),
        ),
        (
            "Активных",
            summary.active,
            Color::Green,
            format!("{}% от общего числа", summary.active_percent()),
        ),
        (
            "Неактивных",
            summary.inactive,
            Color::Red,
            "требуют внимания".to_string(),
        ),
    ];

    for ((title, count, color, caption), area) in cards.into_iter().zip(areas.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                count.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(caption, Style::default().fg(Color::DarkGray))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", title))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(card, *area);
    }
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let input = &app.search_input;
    let (text, style) = if app.search_focused {
        let (before, after) = input.split_at_cursor();
        (
            format!("{}█{}", before, after),
            Style::default().fg(Color::White),
        )
    } else if input.value.is_empty() {
        (
            SEARCH_PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (input.value.clone(), Style::default().fg(Color::White))
    };
    let border = if app.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let search_box = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Поиск ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(search_box, area);
}

fn render_client_table(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.directory.filtered();

    // Show count: filtered / total
    let total = app.directory.clients().len();
    let title = if app.directory.query().is_empty() {
        format!(" Клиенты ({}) ", total)
    } else {
        format!(" Клиенты ({}/{}) ", visible.len(), total)
    };
    let border = if app.search_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .padding(Padding::horizontal(1));

    if let Some(message) = app.directory.empty_message() {
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        [
            "ФИО",
            "Компания",
            "Email",
            "Телефон",
            "Статус",
            "Дата регистрации",
        ]
        .into_iter()
        .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Cyan));

    let rows: Vec<Row> = visible
        .iter()
        .map(|client| {
            Row::new(vec![
                Cell::from(client.name.as_str()),
                Cell::from(client.company.as_str()),
                Cell::from(client.email.as_str()),
                Cell::from(client.phone.as_str()),
                Cell::from(status_badge(client.status)),
                Cell::from(format_ru_date(client.registered_at)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Length(18),
        Constraint::Length(11),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}
