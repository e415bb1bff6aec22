//! Client error types

use thiserror::Error;

/// Fallback shown when a failure response carries no usable message
pub const FALLBACK_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (the request never completed)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The booking service reported a failure
    #[error("{message}")]
    Service { message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
