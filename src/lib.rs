//! TASJIL - terminal sign-in and profile-creation forms
//!
//! Renders the two screens of a mobile form flow in the terminal and holds
//! the controlled field state behind them.

use std::fmt;

pub mod app;
pub mod config;
pub mod form;
pub mod logger;

// Common error types
#[derive(Debug)]
pub enum TasjilError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Logger could not be installed
    LoggerError(String),
    /// Snapshot serialization error
    SerializationError(String),
}

impl fmt::Display for TasjilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TasjilError::IoError(err) => write!(f, "I/O error: {}", err),
            TasjilError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TasjilError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            TasjilError::LoggerError(msg) => write!(f, "Logger error: {}", msg),
            TasjilError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TasjilError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TasjilError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TasjilError {
    fn from(err: std::io::Error) -> Self {
        TasjilError::IoError(err)
    }
}

impl From<serde_json::Error> for TasjilError {
    fn from(err: serde_json::Error) -> Self {
        TasjilError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for TasjilError {
    fn from(err: toml::de::Error) -> Self {
        TasjilError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for TasjilError {
    fn from(err: toml::ser::Error) -> Self {
        TasjilError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for TASJIL operations
pub type Result<T> = std::result::Result<T, TasjilError>;

/// Error handling utilities
pub mod error {
    use super::TasjilError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &TasjilError) -> String {
        match error {
            TasjilError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check permissions on the config and data directories."
                    .to_string()
            }
            TasjilError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            TasjilError::TuiError(_) => {
                "The terminal could not be driven. Run tasjil from an interactive terminal."
                    .to_string()
            }
            TasjilError::LoggerError(_) => {
                "Failed to open the log file. Check disk space and permissions.".to_string()
            }
            _ => error.to_string(),
        }
    }

    /// Whether the error means the terminal never reached a usable state
    pub fn is_terminal_error(error: &TasjilError) -> bool {
        matches!(error, TasjilError::TuiError(_))
    }
}

// Common types and constants
pub const APP_NAME: &str = "tasjil";
pub const CONFIG_FILE: &str = "tasjil.toml";
pub const LOG_FILE: &str = "tasjil.log";
