//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every variant is a resolution failure, never a "not found": an unknown
/// barcode is reported as `Ok(None)` by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status other than 404
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Configured base URL is unusable
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Body is not the expected JSON shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
