//! Client error types

use shared::ValidationError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network/transport)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local validation failure, detected before any request is sent
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Application-level rejection (`success: false`); the message comes
    /// from the server verbatim
    #[error("{0}")]
    Rejected(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server rejected the request shape
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
