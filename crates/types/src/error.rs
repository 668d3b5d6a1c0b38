//! Error types for the Joules energy agent

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
///
/// Every variant is fatal for the agent: the properties file could not be
/// read, so no configuration exists. Malformed values inside a readable file
/// are never reported through this type, they resolve to defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// File exists but could not be read
    #[error("Configuration file could not be read: {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Classify an I/O failure for the file at `path`
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound { path },
            _ => ConfigError::Unreadable { path, source },
        }
    }

    /// Path of the file that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::FileNotFound { path } | ConfigError::Unreadable { path, .. } => path,
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
