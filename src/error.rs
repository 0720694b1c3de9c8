//! Error types for wellness-core

use thiserror::Error;

/// Errors that can occur during computation
#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse payload: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl WellnessError {
    /// Shorthand for building an `InvalidInput` error
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WellnessError::InvalidInput(msg.into())
    }

    /// Whether this error is a rejected precondition rather than a transport problem
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, WellnessError::InvalidInput(_))
    }
}
