//! Error types for the CLI.
//!
//! Every failure path surfaces through [`CliError`], with per-stage error
//! enums carrying the file-system context a user needs to act on the
//! message.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading the IR document.
    #[error("Failed to load IR document: {0}")]
    Load(#[from] LoadError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Error during file watching.
    #[error("Watch error: {0}")]
    Watch(#[from] WatchError),

    /// Validation failed (generated schemas out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Validation failures exit with 2 so scripts can tell "schemas are
    /// stale" apart from operational failures; everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            _ => 1,
        }
    }
}

/// Error loading an IR document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Document file does not exist.
    #[error("IR document not found: {path}")]
    NotFound { path: PathBuf },

    /// Document is not valid JSON or does not match the IR shape.
    #[error("Invalid IR document {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    /// IO error reading the document.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error during file watching.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Failed to initialize the watcher.
    #[error("Failed to initialize file watcher: {0}")]
    Init(String),

    /// Error reported by the notification backend.
    #[error("Watch notification error: {0}")]
    Notify(String),
}

impl LoadError {
    /// Create a not-found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid-document error.
    pub fn invalid_document(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path,
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}
