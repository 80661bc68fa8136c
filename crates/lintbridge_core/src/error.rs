//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading serialized linter settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    /// The settings text is not valid JSON/JSONC.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// The settings do not match the expected shape.
    #[error("Invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
