//! Error types for configuration loading.

use thiserror::Error;

/// Errors raised while loading machine or print-settings files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be opened or read.
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    /// File is not the expected JSON shape.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
