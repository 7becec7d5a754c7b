//! API Error Types
//!
//! Failure taxonomy for calls against the analysis service. Serializable so
//! failures can be carried inside workflow state snapshots.

use serde::{Deserialize, Serialize};

/// Error from a single call against the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiError {
    /// Transport failure: connection refused, DNS, elapsed timeout
    Network { message: String },
    /// Non-2xx response; `detail` carries the response body verbatim
    Server { status: u16, detail: String },
    /// A 2xx response whose body did not match the expected shape
    Parse { message: String },
}

impl ApiError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
        }
    }

    /// Create a server error from a non-2xx status and its body text
    pub fn server(status: u16, detail: impl Into<String>) -> Self {
        Self::Server {
            status,
            detail: detail.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network { message } => write!(f, "Network error: {}", message),
            ApiError::Server { status, detail } => {
                write!(f, "Server error ({}): {}", status, detail)
            }
            ApiError::Parse { message } => write!(f, "Parse error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
