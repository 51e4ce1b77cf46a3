//! HTTP backend abstraction for the album API.
//!
//! The client is generic over [`HttpBackend`] so tests can swap the
//! network for canned JSON. The production backend is a thin reqwest
//! wrapper: one attempt per call, no retry.

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `AlbumApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        debug!(url = %url, "GET");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Decode separately so a malformed body surfaces as JsonParse,
        // not as a transport error.
        let bytes = response.bytes().await?;
        let data: T = serde_json::from_slice(&bytes)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
