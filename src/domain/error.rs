use std::io;

use thiserror::Error;

/// Library-wide error type for slotfill operations.
///
/// Malformed resolver input never produces one of these; it degrades to
/// `NOT_FOUND` and a `debug_info` entry instead. Errors are reserved for the
/// host side (reading inputs, loading config) and for internal defects.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An input file named on the command line does not exist.
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal invariant broken. Always a defect, never a user error.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn invariant<S: Into<String>>(message: S) -> Self {
        AppError::InvariantViolation(message.into())
    }
}
