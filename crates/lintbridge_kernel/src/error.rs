//! Kernel error types.

use thiserror::Error;

/// Errors that can occur during a linting pass.
#[derive(Debug, Error)]
pub enum KernelError {
    /// No plugin or built-in processor handles the file extension.
    #[error("No processor available for extension '{0}'")]
    UnsupportedExtension(String),

    /// A rule reported a location outside the document.
    #[error("Rule '{rule_id}' reported an out-of-range location: {message}")]
    OutOfRange { rule_id: String, message: String },

    /// A plugin failed while processing the document.
    #[error("Plugin '{plugin_id}' failed: {message}")]
    Plugin { plugin_id: String, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (e.g. a rule panicked).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KernelError {
    /// Creates an unsupported extension error.
    pub fn unsupported_extension(ext: impl Into<String>) -> Self {
        Self::UnsupportedExtension(ext.into())
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }

    /// Creates a plugin error.
    pub fn plugin(plugin_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Plugin {
            plugin_id: plugin_id.into(),
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
