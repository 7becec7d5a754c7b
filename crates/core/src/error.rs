//! Core Error Types
//!
//! Defines the foundational error types used across the ClauseLens workspace.
//! These error types are dependency-free (only thiserror + std) to keep the
//! core crate lightweight.
//!
//! The main application crate extends these with additional error variants
//! (e.g., Network, Server) that require heavier dependencies.

use thiserror::Error;

/// Core error type for the ClauseLens workspace.
///
/// This is the minimal error set that the core crate needs. The application
/// crate defines additional variants for transport failures, config, etc.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors (bad user input, rejected before any request)
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
