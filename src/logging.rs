//! Log file setup
//!
//! One `tracing` subscriber per process, writing plain-text lines to the log
//! file in append mode.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{PackError, PackResult};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "DEPLOYPACK_LOG";

/// Effective default level: the configured one, raised by `-v` / `-vv`
pub fn default_directive(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Log file location, relative paths resolved against `work_dir`
pub fn log_path(config: &LoggingConfig, work_dir: &Path) -> PathBuf {
    work_dir.join(&config.file)
}

/// Install the global subscriber. Returns the log file path.
pub fn init(config: &LoggingConfig, verbose: u8, work_dir: &Path) -> PackResult<PathBuf> {
    let path = log_path(config, work_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| PackError::io("open log file", &path, e))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive(&config.level, verbose)))
        .map_err(|e| PackError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| PackError::Logging(e.to_string()))?;

    Ok(path)
}
