mod app;
mod cli;
mod config;
mod list;
mod logging;
mod runtime;
mod toast;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::CrmConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = CrmConfig::load()?;
    logging::init_logging(&CrmConfig::log_path()?, &cfg.log_level)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_tui(&cfg),
        Commands::List { query, json } => {
            list::print_directory(query.as_deref(), json, &mut io::stdout().lock())
        }
        Commands::ConfigPath => {
            let path = CrmConfig::ensure_default_file()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_tui(cfg: &CrmConfig) -> Result<()> {
    let mut app = App::new(cfg);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "UI loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
