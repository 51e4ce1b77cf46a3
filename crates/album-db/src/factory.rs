//! Composition utilities for wiring the comment store.
//!
//! Construction only. No domain logic lives here.

use album_core::CommentStore;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::repositories::SqliteCommentStore;

/// Factory for creating store instances with `SQLite` backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a comment store from a pool.
    pub fn comment_store(pool: SqlitePool) -> Arc<SqliteCommentStore> {
        Arc::new(SqliteCommentStore::new(pool))
    }

    /// Create a comment store behind the core port.
    ///
    /// This is the recommended way for adapters to obtain a store.
    pub fn build_store(pool: SqlitePool) -> Arc<dyn CommentStore> {
        Self::comment_store(pool)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a comment store using this test database.
    pub fn comment_store(&self) -> SqliteCommentStore {
        SqliteCommentStore::new(self.pool.clone())
    }
}
