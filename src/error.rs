//! Error types for `stylish-report`.
//!
//! The formatter itself never fails: every [`Error`] is raised at the edges
//! (reading input, decoding severities, loading configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing input for the formatter.
#[derive(Debug, Error)]
pub enum Error {
    /// A message carried a severity other than 1 (warning) or 2 (error).
    #[error("Unsupported severity {severity} (expected 1 for warning or 2 for error)")]
    UnsupportedSeverity { severity: i64 },

    /// The input was not a JSON array of file results.
    #[error("Invalid lint results: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// The input file does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// The config file is not valid TOML for [`Config`](crate::config::Config).
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `stylish-report` operations.
pub type Result<T> = std::result::Result<T, Error>;
