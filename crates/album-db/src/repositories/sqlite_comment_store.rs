//! `SQLite` implementation of the comment store.
//!
//! Inserts publish the touched `postId` on a broadcast channel. Each
//! `observe_comments` subscription owns a task that re-queries its photo
//! on a matching notification and pushes the snapshot into a `watch`
//! channel.

use album_core::{CommentStore, NewComment, PersistedComment, StorageError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use super::row_mappers::{COMMENT_SELECT_COLUMNS, CommentRow, map_sqlx_error};

/// Capacity of the change notification channel.
///
/// Observers that fall further behind re-query once instead of replaying.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// `SQLite` implementation of the comment store.
pub struct SqliteCommentStore {
    pool: SqlitePool,
    changes: broadcast::Sender<i64>,
}

impl SqliteCommentStore {
    /// Create a new `SQLite` comment store.
    pub fn new(pool: SqlitePool) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { pool, changes }
    }

    /// Number of live `observe_comments` subscriptions.
    pub fn observer_count(&self) -> usize {
        self.changes.receiver_count()
    }
}

async fn select_comments(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<PersistedComment>, StorageError> {
    let rows = sqlx::query_as::<_, CommentRow>(&format!(
        "SELECT {COMMENT_SELECT_COLUMNS} FROM comments WHERE postId = ? ORDER BY id"
    ))
    .bind(post_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx_error)?;

    Ok(rows.into_iter().map(PersistedComment::from).collect())
}

/// Keep `tx` in sync with the stored comments of `post_id` until the
/// receiver goes away or the store is dropped.
async fn forward_changes(
    pool: SqlitePool,
    post_id: i64,
    mut changes: broadcast::Receiver<i64>,
    tx: watch::Sender<Vec<PersistedComment>>,
) {
    loop {
        tokio::select! {
            () = tx.closed() => break,
            msg = changes.recv() => match msg {
                Ok(changed) if changed != post_id => continue,
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(post_id, skipped, "Comment observer lagged, re-querying");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }

        match select_comments(&pool, post_id).await {
            Ok(rows) => {
                if tx.send(rows).is_err() {
                    break;
                }
            }
            Err(e) => warn!(post_id, "Failed to refresh observed comments: {e}"),
        }
    }
    debug!(post_id, "Comment observer stopped");
}

#[async_trait]
impl CommentStore for SqliteCommentStore {
    async fn insert(&self, comment: &NewComment) -> Result<i64, StorageError> {
        let result =
            sqlx::query("INSERT INTO comments (postId, name, email, body) VALUES (?, ?, ?, ?)")
                .bind(comment.post_id)
                .bind(&comment.name)
                .bind(&comment.email)
                .bind(&comment.body)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        let id = result.last_insert_rowid();
        debug!(post_id = comment.post_id, id, "Stored comment");

        // No receivers just means nobody is observing
        let _ = self.changes.send(comment.post_id);
        Ok(id)
    }

    async fn comments_for(&self, post_id: i64) -> Result<Vec<PersistedComment>, StorageError> {
        select_comments(&self.pool, post_id).await
    }

    async fn observe_comments(
        &self,
        post_id: i64,
    ) -> Result<watch::Receiver<Vec<PersistedComment>>, StorageError> {
        // Subscribe before the first read so no insert slips between them
        let changes = self.changes.subscribe();
        let initial = select_comments(&self.pool, post_id).await?;

        let (tx, rx) = watch::channel(initial);
        tokio::spawn(forward_changes(self.pool.clone(), post_id, changes, tx));

        Ok(rx)
    }
}
