//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

use clauselens_api::ApiError;
use clauselens_core::CoreError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation errors (bad input rejected before any request is issued)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failures, including elapsed timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx server responses; detail carries the body verbatim
    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// Malformed response payloads
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error came from user input rather than the service
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network { message } => AppError::Network(message),
            ApiError::Server { status, detail } => AppError::Server { status, detail },
            ApiError::Parse { message } => AppError::Parse(message),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => AppError::Validation(msg),
            CoreError::Io(e) => AppError::Io(e),
            CoreError::Serialization(e) => AppError::Serialization(e),
            CoreError::Parse(msg) => AppError::Parse(msg),
            CoreError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Convert AppError to a string for rendering
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
