//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::Theme;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Color scheme, light by default
    pub theme: Option<Theme>,
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Seconds before the contact confirmation disappears
    pub contact_dismiss_secs: Option<u64>,
    /// Show the section menu on startup
    pub show_menu: Option<bool>,
}

impl SiteConfig {
    pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);
    pub const DEFAULT_CONTACT_DISMISS: Duration = Duration::from_secs(5);
    /// Longest honoured contact dismiss delay
    pub const MAX_CONTACT_DISMISS: Duration = Duration::from_secs(24 * 60 * 60);

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "resonance-healing", "resonance-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(Self::DEFAULT_SUBMIT_DELAY)
    }

    pub fn contact_dismiss(&self) -> Duration {
        self.contact_dismiss_secs
            .map(Duration::from_secs)
            .unwrap_or(Self::DEFAULT_CONTACT_DISMISS)
            .min(Self::MAX_CONTACT_DISMISS)
    }

    pub fn show_menu(&self) -> bool {
        self.show_menu.unwrap_or(true)
    }
}
