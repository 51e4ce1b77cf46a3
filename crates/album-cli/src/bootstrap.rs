//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - HTTP client for the photo/comment API (via album-api)
//! - Database pool and comment store (via album-db)
//! - Analytics sink (tracing-backed)
//!
//! Handlers receive the composed `CliContext` and build view-models from it.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use album_api::{ApiClientConfig, DefaultApiClient};
use album_core::paths::database_path;
use album_core::{
    AlbumApiPort, AnalyticsSink, CommentRepository, CommentStore, CommentViewModel,
    PhotoRepository, PhotoViewModel,
};
use album_db::{StoreFactory, setup_database};
use anyhow::Result;

use crate::analytics::TracingAnalytics;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// API base URL; `None` uses the public endpoint.
    pub api_base_url: Option<String>,
    /// Database file; `None` resolves it under the data directory.
    pub db_path: Option<PathBuf>,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            db_path: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl CliConfig {
    /// Create config with default settings.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Create config from parsed global arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_base_url: cli.api_base_url.clone(),
            db_path: cli.db_path.clone(),
            ..Self::default()
        }
    }

    /// API client configuration derived from this config.
    pub fn api_config(&self) -> ApiClientConfig {
        let config = ApiClientConfig::new().with_timeout(self.request_timeout);
        match &self.api_base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        }
    }

    /// Database path, falling back to the data directory.
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => Ok(database_path()?),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    api: Arc<dyn AlbumApiPort>,
    store: Arc<dyn CommentStore>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl CliContext {
    /// Assemble a context from already-built adapters.
    pub fn new(
        api: Arc<dyn AlbumApiPort>,
        store: Arc<dyn CommentStore>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            api,
            store,
            analytics,
        }
    }

    /// Access the local comment store.
    pub fn store(&self) -> &Arc<dyn CommentStore> {
        &self.store
    }

    /// Build a photo view-model; its initial fetch starts immediately.
    pub fn photo_view_model(&self) -> PhotoViewModel {
        PhotoViewModel::new(
            PhotoRepository::new(Arc::clone(&self.api)),
            Arc::clone(&self.analytics),
        )
    }

    /// Build a comment view-model backed by the local store.
    pub fn comment_view_model(&self) -> CommentViewModel {
        CommentViewModel::new(
            CommentRepository::new(Arc::clone(&self.api)),
            Arc::clone(&self.analytics),
            Some(Arc::clone(&self.store)),
        )
    }
}

/// Bootstrap the CLI application.
///
/// 1. Builds the HTTP client from `config`
/// 2. Opens (or creates) the comment database
/// 3. Wires a tracing-backed analytics sink
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. API client
    let api: Arc<dyn AlbumApiPort> = Arc::new(DefaultApiClient::new(&config.api_config())?);

    // 2. Database pool with full schema setup
    let db_path = config.resolve_db_path()?;
    let pool = setup_database(&db_path).await?;
    let store = StoreFactory::build_store(pool);

    // 3. Analytics
    let analytics: Arc<dyn AnalyticsSink> = Arc::new(TracingAnalytics::new());

    Ok(CliContext::new(api, store, analytics))
}
