//! File logger
//!
//! The terminal belongs to the UI, so log lines go to
//! `$DATA_HOME/tasjil/tasjil.log` instead of stdout.

use crate::config::AppConfig;
use crate::{TasjilError, Result, APP_NAME, LOG_FILE};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

/// Standard log file location
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        TasjilError::LoggerError("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Install the global subscriber writing to `log_path`
pub fn setup_logger(log_level: LevelFilter, log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    tracing_subscriber::registry()
        .with(
            file_log
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("mio")
                        && !metadata.target().starts_with("crossterm")
                })),
        )
        .try_init()
        .map_err(|e| TasjilError::LoggerError(e.to_string()))
}

/// Parse the LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>> {
    match std::env::var("LOG_LEVEL") {
        Ok(l) => LevelFilter::from_str(&l)
            .map(Some)
            .map_err(|e| TasjilError::LoggerError(format!("Invalid LOG_LEVEL '{}': {}", l, e))),
        Err(_) => Ok(None),
    }
}

/// Pick the level to log at. An explicit level already stored in `config`
/// wins; otherwise LOG_LEVEL, then the config file. `env_level` is not
/// consulted when `explicit` is set, so a bad LOG_LEVEL cannot block an
/// explicit choice.
pub fn resolve_level(
    config: &AppConfig,
    explicit: bool,
    env_level: impl FnOnce() -> Result<Option<LevelFilter>>,
) -> Result<LevelFilter> {
    if !explicit {
        if let Some(level) = env_level()? {
            return Ok(level);
        }
    }
    config.level_filter()
}
