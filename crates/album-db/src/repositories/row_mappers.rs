//! Row mapping helpers for `SQLite` queries.

use album_core::{PersistedComment, StorageError};
use sqlx::error::ErrorKind;

/// Shared SELECT column list for comment queries.
pub const COMMENT_SELECT_COLUMNS: &str = "id, postId, name, email, body";

/// A row of the `comments` table.
#[derive(Debug, sqlx::FromRow)]
pub struct CommentRow {
    pub id: i64,
    #[sqlx(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl From<CommentRow> for PersistedComment {
    fn from(row: CommentRow) -> Self {
        Self {
            local_id: row.id,
            post_id: row.post_id,
            name: row.name,
            email: row.email,
            body: row.body,
        }
    }
}

/// Map `SQLx` errors to `StorageError`.
pub fn map_sqlx_error(e: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db) = &e {
        if !matches!(db.kind(), ErrorKind::Other) {
            return StorageError::Constraint(db.message().to_string());
        }
    }
    StorageError::Database(e.to_string())
}
