use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_directory_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('x') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.search_input_clear();
        return;
    }

    if app.search_focused {
        handle_search_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('/') | KeyCode::Tab => app.focus_search(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            if let Some(id) = app.selected_client_id() {
                enqueue_action(action_tx, Action::DeleteClient { id });
            }
        }
        KeyCode::Esc | KeyCode::Char('h') => app.navigate_to(View::Landing),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c);
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Left => app.search_move_cursor(true),
        KeyCode::Right => app.search_move_cursor(false),
        KeyCode::Home => app.search_cursor_home_end(true),
        KeyCode::End => app.search_cursor_home_end(false),
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter | KeyCode::Down => {
            app.unfocus_search();
        }
        _ => {}
    }
}
