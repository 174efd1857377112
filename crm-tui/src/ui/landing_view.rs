use super::widgets::controls_line;
use super::*;
use crate::app::LandingCard;

const KEY_FEATURES: [(&str, &str); 4] = [
    (
        "Быстрый поиск",
        "Мгновенный поиск по имени, компании или контактам",
    ),
    (
        "Управление статусами",
        "Отслеживание активности клиентов в режиме реального времени",
    ),
    (
        "Редактирование данных",
        "Простое добавление и изменение информации о клиентах",
    ),
    ("Статистика", "Визуализация ключевых показателей и метрик"),
];

pub fn render_landing_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Length(6), // Cards
            Constraint::Min(6),    // Key features
            Constraint::Length(3), // Controls
            Constraint::Length(1), // Footer
        ])
        .split(body);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Корпоративная система управления",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Профессиональное решение для управления клиентской базой и бизнес-процессами",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0]);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);
    for (card, area) in LandingCard::ALL.iter().zip(card_areas.iter()) {
        render_card(frame, *card, *card == app.focused_card, *area);
    }

    let mut feature_lines = Vec::with_capacity(KEY_FEATURES.len() * 2);
    for (title, description) in KEY_FEATURES {
        feature_lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Cyan)),
            Span::styled(
                title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        feature_lines.push(Line::from(Span::styled(
            format!("  {}", description),
            Style::default().fg(Color::Gray),
        )));
    }
    let features = Paragraph::new(feature_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Ключевые возможности ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(features, chunks[2]);

    let controls = Paragraph::new(controls_line(&[
        ("←→/Tab", "Выбор"),
        ("Enter", "Открыть"),
        ("c", "Перейти к базе клиентов"),
        ("q", "Выход"),
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
    frame.render_widget(controls, chunks[3]);

    let footer = Paragraph::new(Span::styled(
        "© 2024 CRM Система. Корпоративное решение для управления клиентами",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);
}

fn render_card(frame: &mut Frame, card: LandingCard, focused: bool, area: Rect) {
    let border = match (focused, card.is_enabled()) {
        (true, _) => Style::default().fg(Color::Yellow),
        (false, true) => Style::default().fg(Color::White),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let badge = if card.is_enabled() {
        Span::styled("[ Открыть ]", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ Скоро ]", Style::default().fg(Color::DarkGray))
    };

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            card.description(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(badge),
    ])
    .wrap(ratatui::widgets::Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", card.title()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
