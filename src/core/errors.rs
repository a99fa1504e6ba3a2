//! Error types for the python-filename-linter library.
//!
//! Recoverable conditions (out-of-root inputs, non-Python inputs, rename
//! collisions) never become errors; they are handled where they are detected.
//! What remains here are the failures that end a run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main result type for linter operations.
pub type Result<T> = std::result::Result<T, LinterError>;

/// Error type for all linter operations.
#[derive(Error, Debug)]
pub enum LinterError {
    /// I/O related errors (metadata lookups, canonicalization, renames)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Path the operation was acting on
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization errors while rendering a report
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

impl LinterError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source,
        }
    }

    /// Create a new I/O error tied to the path being processed
    pub fn io_at(message: impl Into<String>, path: &Path, source: io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", message.into(), path.display()),
            path: Some(path.to_path_buf()),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl From<io::Error> for LinterError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for LinterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: err,
        }
    }
}
