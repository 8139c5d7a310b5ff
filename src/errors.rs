//! Shared error types for gradetally.
//!
//! Library code returns [`Error`]; the binary and command handlers wrap it in
//! `anyhow` with additional context. Most failures during a scan are not
//! surfaced as errors at all: unreadable files and directories are logged and
//! skipped, so the variants here mostly cover configuration and output.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for gradetally operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors, one message per problem found
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Marker pattern could not be compiled
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// Summary CSV encoding errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Wrap an I/O error with a message and the path it concerns
    pub fn io_at(message: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            message: format!("{}: {}", message.into(), source),
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    /// The path this error concerns, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileSystem { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// True when the underlying cause is a missing file or directory
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileSystem {
                source: Some(source),
                ..
            }
            | Self::Io(source) => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
