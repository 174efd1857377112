use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_landing_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.landing_focus_previous(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.landing_focus_next(),
        KeyCode::Enter => app.activate_focused_card(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.navigate_to(View::Directory),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
