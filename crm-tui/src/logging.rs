//! File logging for the TUI.
//!
//! The terminal belongs to the UI while it runs, so log output goes to a file
//! next to the config instead of stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter for our own crates at `level`.
fn default_filter(level: &str) -> String {
    format!("crm_tui={level},crm_core={level}")
}

/// Install the global subscriber, appending to `path`.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true),
    );

    // Ignore the error if a subscriber is already installed.
    let _ = subscriber.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_both_crates() {
        assert_eq!(default_filter("debug"), "crm_tui=debug,crm_core=debug");
    }

    #[test]
    fn creates_log_file_and_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("crm-tui.log");
        init_logging(&path, "info").unwrap();
        assert!(path.exists());
    }
}
