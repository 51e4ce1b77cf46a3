//! `AlbumApiPort` implementation for `ApiClient`.
//!
//! Internal `ApiError`s are mapped to the core `RemoteError` here so no
//! reqwest or serde types leak past the crate boundary.

use album_core::{AlbumApiPort, Comment, Photo, RemoteError};
use async_trait::async_trait;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `RemoteError`.
pub(crate) fn map_error(err: ApiError) -> RemoteError {
    match err {
        ApiError::RequestFailed { status, url } => RemoteError::Status { status, url },
        ApiError::Network(e) if e.is_decode() => RemoteError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::Network(e) => RemoteError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => RemoteError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => RemoteError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> AlbumApiPort for ApiClient<B> {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, RemoteError> {
        self.list_photos().await.map_err(|e| {
            let err = map_error(e);
            warn!(kind = err.kind(), "Photo fetch failed: {err}");
            err
        })
    }

    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, RemoteError> {
        self.list_comments(post_id).await.map_err(|e| {
            let err = map_error(e);
            warn!(post_id, kind = err.kind(), "Comment fetch failed: {err}");
            err
        })
    }
}
