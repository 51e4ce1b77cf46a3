//! Photo and comment resources.

use album_core::{Comment, Photo};
use tracing::debug;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{CommentDto, PhotoDto};
use crate::url::{build_comments_url, build_photos_url};

use super::ApiClient;

impl<B: HttpBackend> ApiClient<B> {
    /// Fetch every photo, in server order.
    pub(crate) async fn list_photos(&self) -> ApiResult<Vec<Photo>> {
        let url = build_photos_url(&self.config);
        let dtos: Vec<PhotoDto> = self.backend.get_json(&url).await?;
        debug!(count = dtos.len(), "Fetched photos");
        Ok(dtos.into_iter().map(Photo::from).collect())
    }

    /// Fetch the comments of one photo, in server order.
    pub(crate) async fn list_comments(&self, post_id: i64) -> ApiResult<Vec<Comment>> {
        let url = build_comments_url(&self.config, post_id);
        let dtos: Vec<CommentDto> = self.backend.get_json(&url).await?;
        debug!(post_id, count = dtos.len(), "Fetched comments");
        Ok(dtos.into_iter().map(Comment::from).collect())
    }
}
