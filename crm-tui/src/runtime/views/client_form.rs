use crate::app::{App, FormFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_client_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitForm),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_previous_field(),
        _ if app.form_focus == FormFocus::Status => handle_status_key(key, app),
        _ => handle_text_key(key, app),
    }
}

fn handle_status_key(key: KeyEvent, app: &mut App) {
    if matches!(
        key.code,
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')
    ) {
        app.form_toggle_status();
    }
}

fn handle_text_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input_clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input_char(c);
        }
        KeyCode::Backspace => app.form_input_backspace(),
        KeyCode::Left => app.form_move_cursor(true),
        KeyCode::Right => app.form_move_cursor(false),
        KeyCode::Home => app.form_cursor_home_end(true),
        KeyCode::End => app.form_cursor_home_end(false),
        _ => {}
    }
}
