//! Configuration management for Shortcut List.
//!
//! This module provides configuration loading, saving, and defaults.
//! Configuration is stored in TOML format in a platform-appropriate location.

use crate::error::{Result, ShortcutError};
use crate::persistence::ShortcutFile;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main configuration structure for Shortcut List.
///
/// ## Example Configuration File (shortcut-list.toml)
///
/// ```toml
/// [general]
/// data_file = "/home/me/Dropbox/shortcuts.json"
/// log_level = "info"
///
/// [display]
/// max_results = 200
/// show_ids = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Listing output settings
    pub display: DisplayConfig,
}

/// General configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Shortcut document location (None = `~/ShortcutList/shortcuts.json`)
    pub data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            data_file: None,
            log_level: "warn".to_string(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of rows printed for a search (0 = no limit)
    pub max_results: usize,

    /// Print identifiers next to each row
    pub show_ids: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_results: 0,
            show_ids: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default config if no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        info!(path = %path.display(), "Loading configuration");
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| ShortcutError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
        })?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Saving configuration");
        let contents = toml::to_string_pretty(self).map_err(|e| ShortcutError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "shortcut-list").ok_or(
            ShortcutError::DataDirUnavailable {
                purpose: "the configuration file",
            },
        )?;

        Ok(dirs.config_dir().join("shortcut-list.toml"))
    }

    /// Build the file handle for the configured document.
    ///
    /// The default location's directory is created if absent; an explicit
    /// `data_file` is used as-is.
    pub fn shortcut_file(&self) -> Result<ShortcutFile> {
        match self.general.data_file {
            Some(ref path) => Ok(ShortcutFile::new(path)),
            None => ShortcutFile::at_default_location(),
        }
    }

    /// Cap a result count by `display.max_results`.
    pub fn result_limit(&self, requested: Option<usize>) -> Option<usize> {
        let configured = match self.display.max_results {
            0 => None,
            n => Some(n),
        };
        match (requested, configured) {
            (Some(r), Some(c)) => Some(r.min(c)),
            (r, c) => r.or(c),
        }
    }
}
