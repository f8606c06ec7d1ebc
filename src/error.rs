//! Error types for the restore reconciliation core

use thiserror::Error;

/// Result type alias using the console core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Restore configuration error types
#[derive(Error, Debug)]
pub enum Error {
    /// A required input collection has not finished loading
    #[error("Input not yet available: {0}")]
    InputUnavailable(&'static str),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Restore submission failure reported by the API collaborator
    #[error("Restore submission failed: {0}")]
    Submission(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a submission error
    pub fn submission(msg: impl Into<String>) -> Self {
        Error::Submission(msg.into())
    }
}
