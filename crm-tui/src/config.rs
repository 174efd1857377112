use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which screen the TUI opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Landing,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmConfig {
    #[serde(default)]
    pub start_view: StartView,
    /// How long a success toast stays in the status bar.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
    /// Default log filter when RUST_LOG is unset, e.g. "info" or "debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Open with the three sample clients instead of an empty directory.
    #[serde(default = "default_seed_sample_clients")]
    pub seed_sample_clients: bool,
}

fn default_toast_seconds() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_sample_clients() -> bool {
    true
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            start_view: StartView::default(),
            toast_seconds: default_toast_seconds(),
            log_level: default_log_level(),
            seed_sample_clients: default_seed_sample_clients(),
        }
    }
}

impl CrmConfig {
    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("crm-tui"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("crm-tui.log"))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Returns the config path, writing a default file first if none exists.
    pub fn ensure_default_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }
}
