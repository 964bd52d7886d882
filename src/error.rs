//! Error types for deploypack
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for packaging operations
#[derive(Error, Debug)]
pub enum PackError {
    /// A git command failed or could not be started
    #[error("git {operation} failed: {message}")]
    VersionControl { operation: String, message: String },

    /// No commit matched the resolution query
    #[error("no commit found matching {query}")]
    NoMatchingCommit { query: String },

    /// File system operation failed
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Tree copy target is already present
    #[error("destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    /// Archive could not be written
    #[error("failed to create archive {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// Manifest line could not be parsed
    #[error("invalid manifest {}:{line}: {message}", file.display())]
    ManifestParse {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// Log subscriber could not be installed
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl PackError {
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        PackError::Io {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
