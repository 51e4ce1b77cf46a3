//! Internal error types for album API operations.
//!
//! These errors are internal to `album-api` and are mapped to
//! `RemoteError` at the port boundary.

use thiserror::Error;

/// Result type alias for album API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to album API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("Album API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
