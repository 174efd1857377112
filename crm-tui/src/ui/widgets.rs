use crm_core::ClientStatus;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn status_badge(status: ClientStatus) -> Span<'static> {
    let color = if status.is_active() {
        Color::Green
    } else {
        Color::Red
    };
    Span::styled(
        status.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// A "key: action" hint row, keys highlighted.
pub fn controls_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::raw(format!(": {}{}", action, sep)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_line_joins_hints() {
        let line = controls_line(&[("Enter", "Сохранить"), ("Esc", "Отмена")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter: Сохранить  Esc: Отмена");
    }

    #[test]
    fn badge_uses_russian_label() {
        assert_eq!(status_badge(ClientStatus::Inactive).content, "Неактивный");
    }
}
