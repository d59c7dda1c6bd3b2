//! Local configuration management.
//!
//! Config is stored at `~/.config/dashgate/config.toml` and contains:
//! - the weekday that opens a week for `thisweek` / `lastweek`
//! - an optional package catalog file overriding the built-in tables

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::PackageCatalog;
use crate::timeframe::WeekStart;

const CONFIG_DIR: &str = "dashgate";
const CONFIG_FILE: &str = "config.toml";

/// Local configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalConfig {
    /// First day of the week (default: sunday).
    #[serde(default)]
    pub week_start: WeekStart,

    /// Package catalog to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_file: Option<PathBuf>,
}

impl LocalConfig {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, defaults when the file does not exist.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")
    }

    /// The package catalog this config selects.
    pub fn catalog(&self) -> Result<PackageCatalog> {
        match &self.packages_file {
            Some(path) => {
                debug!(path = %path.display(), "loading package catalog");
                PackageCatalog::load(path)
                    .with_context(|| format!("Failed to load package catalog {}", path.display()))
            }
            None => Ok(PackageCatalog::builtin().clone()),
        }
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join(CONFIG_DIR))
    }
}
