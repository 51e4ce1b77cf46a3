//! Album API client.
//!
//! Generic over an HTTP backend so tests can run against canned JSON.

mod resources;

use album_core::RemoteError;
use url::Url;

use crate::config::ApiClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use crate::port::map_error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default album API client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the photo/comment API.
///
/// Use `DefaultApiClient` for production code and talk to it through
/// `AlbumApiPort`.
pub struct ApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with [`RemoteError::Configuration`] when the base URL does not
    /// parse or the HTTP client cannot be built.
    pub fn new(config: &ApiClientConfig) -> Result<Self, RemoteError> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config).map_err(|e| RemoteError::Configuration {
            message: e.to_string(),
        })?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client against the public endpoint.
    pub fn default_client() -> Result<Self, RemoteError> {
        Self::new(&ApiClientConfig::default())
    }

    fn to_internal_config(config: &ApiClientConfig) -> Result<ApiConfig, RemoteError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| map_error(e.into()))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Configuration {
                message: format!("{} cannot be used as a base URL", config.base_url),
            });
        }
        Ok(ApiConfig { base_url })
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// The base URL every request is built from.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }
}
