//! Local comment store port definition.
//!
//! This port defines the interface for persisting locally authored
//! comments and observing them per photo.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;

use crate::domain::{NewComment, PersistedComment};

/// Errors that can occur in comment store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A table constraint rejected the write.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Port for local comment persistence.
///
/// Rows are keyed by a store-assigned id and are always returned in
/// insertion order.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Insert a comment and return its newly assigned key.
    async fn insert(&self, comment: &NewComment) -> Result<i64, StorageError>;

    /// Read the stored comments for a photo once.
    async fn comments_for(&self, post_id: i64) -> Result<Vec<PersistedComment>, StorageError>;

    /// Observe the stored comments for a photo.
    ///
    /// The receiver starts with the current snapshot and gets a fresh one
    /// after every insert for `post_id`. Dropping the receiver ends the
    /// subscription.
    async fn observe_comments(
        &self,
        post_id: i64,
    ) -> Result<watch::Receiver<Vec<PersistedComment>>, StorageError>;
}
