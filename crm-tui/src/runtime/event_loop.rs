use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    info!(view = ?app.current_view, "Starting event loop");
    let (action_tx, mut action_rx) = channel();

    loop {
        app.directory.notifier_mut().expire();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app);
        }

        if !app.running {
            break;
        }
    }

    info!("Event loop finished");
    Ok(())
}
