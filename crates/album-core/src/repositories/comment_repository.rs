//! Comment repository - pass-through over the remote API port.

use std::sync::Arc;

use tracing::debug;

use crate::domain::Comment;
use crate::ports::{AlbumApiPort, RemoteError};

/// Repository for remote comments.
#[derive(Clone)]
pub struct CommentRepository {
    api: Arc<dyn AlbumApiPort>,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(api: Arc<dyn AlbumApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the comments of one photo in server order.
    pub async fn get_comments(&self, photo_id: i64) -> Result<Vec<Comment>, RemoteError> {
        let comments = self.api.fetch_comments(photo_id).await?;
        debug!(photo_id, count = comments.len(), "Fetched comments");
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockAlbumApiPort;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_comments_passes_photo_id() {
        let mut api = MockAlbumApiPort::new();
        api.expect_fetch_comments()
            .with(eq(5))
            .times(1)
            .returning(|post_id| {
                Ok(vec![Comment {
                    post_id,
                    id: 21,
                    name: "n".to_string(),
                    email: "e".to_string(),
                    body: "b".to_string(),
                }])
            });

        let repo = CommentRepository::new(Arc::new(api));
        let comments = repo.get_comments(5).await.unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].post_id, 5);
        assert_eq!(comments[0].id, 21);
    }

    #[tokio::test]
    async fn test_get_comments_propagates_error() {
        let mut api = MockAlbumApiPort::new();
        api.expect_fetch_comments().returning(|_| {
            Err(RemoteError::InvalidResponse {
                message: "expected array".to_string(),
            })
        });

        let repo = CommentRepository::new(Arc::new(api));
        let err = repo.get_comments(1).await.unwrap_err();

        assert_eq!(err.kind(), "invalid_response");
    }
}
