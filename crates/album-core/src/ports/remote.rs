//! Remote album API port definition.
//!
//! Defines the read-only interface to the public photo/comment API.
//! Implementations handle transport (HTTP, JSON) and map their internal
//! errors to [`RemoteError`] at the boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Comment, Photo};

/// Errors from a remote fetch.
///
/// Every variant is local to a single fetch attempt; none is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Transport failure (DNS, connect, TLS, timeout).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// The body could not be decoded into the expected records.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// The client is misconfigured (e.g. unparseable base URL).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RemoteError {
    /// Short machine-readable kind, suitable for logs and UI branching.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Status { .. } => "status",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Configuration { .. } => "configuration",
        }
    }
}

/// Port for the remote album API.
///
/// Both operations are plain GETs with no retry and no partial results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlbumApiPort: Send + Sync {
    /// Fetch every photo, in server order.
    async fn fetch_photos(&self) -> Result<Vec<Photo>, RemoteError>;

    /// Fetch the comments attached to one photo, in server order.
    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, RemoteError>;
}
