use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod client_form;
mod directory;
mod landing;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // The dialog is modal over the directory.
    if app.is_form_open() {
        client_form::handle_client_form_key(key, app, action_tx);
        return;
    }
    match app.current_view {
        View::Landing => landing::handle_landing_key(key, app),
        View::Directory => directory::handle_directory_key(key, app, action_tx),
    }
}
