//! Configuration management module
//!
//! Handles loading, saving, and validation of the application settings.
//! Form values are never written here.

use crate::form::Screen;
use crate::{TasjilError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 5000;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Screen mounted at startup
    pub initial_screen: Screen,
    /// Logo asset shown on the sign-in screen; not interpreted
    pub logo_path: Option<PathBuf>,
    /// Log level filter (error, warn, info, debug, trace, off)
    pub log_level: String,
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Character drawn for each character of a masked field
    pub mask_char: char,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_screen: Screen::SignIn,
            logo_path: Some(PathBuf::from("assets/logo.png")),
            log_level: "info".to_string(),
            tick_rate_ms: 250,
            mask_char: '•',
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the screen mounted at startup
    pub fn with_initial_screen(mut self, screen: Screen) -> Self {
        self.initial_screen = screen;
        self
    }

    /// Set the log level filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the logo asset path
    pub fn with_logo_path(mut self, path: Option<PathBuf>) -> Self {
        self.logo_path = path;
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|e| {
            TasjilError::ConfigError(format!("Invalid log level '{}': {}", self.log_level, e))
        })
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.level_filter()?;

        if self.tick_rate_ms < MIN_TICK_RATE_MS || self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(TasjilError::ConfigError(format!(
                "Tick rate must be between {} and {} ms (got {})",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        if self.mask_char.is_whitespace() || self.mask_char.is_control() {
            return Err(TasjilError::ConfigError(
                "Mask character must be visible".to_string(),
            ));
        }

        if let Some(path) = &self.logo_path {
            if path.as_os_str().is_empty() {
                return Err(TasjilError::ConfigError(
                    "Logo path must not be empty; omit it instead".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TasjilError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            TasjilError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TasjilError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            TasjilError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/tasjil/tasjil.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TasjilError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
