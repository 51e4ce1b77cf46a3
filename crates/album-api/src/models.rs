//! Internal configuration and wire models for the album API.
//!
//! Wire DTOs mirror the JSON field names (`camelCase`) and are converted
//! to domain types before leaving the crate.

use album_core::{Comment, Photo};
use serde::Deserialize;
use url::Url;

#[cfg(test)]
use crate::config::DEFAULT_BASE_URL;

// ============================================================================
// Internal Configuration
// ============================================================================

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Parsed base URL, ending in `/`
    pub base_url: Url,
}

#[cfg(test)]
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

// ============================================================================
// Wire Models
// ============================================================================

/// A photo as returned by `GET /photos`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDto {
    pub album_id: i64,
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl From<PhotoDto> for Photo {
    fn from(dto: PhotoDto) -> Self {
        Self {
            id: dto.id,
            album_id: dto.album_id,
            title: dto.title,
            url: dto.url,
            thumbnail_url: dto.thumbnail_url,
        }
    }
}

/// A comment as returned by `GET /comments?postId=`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        Self {
            post_id: dto.post_id,
            id: dto.id,
            name: dto.name,
            email: dto.email,
            body: dto.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_api_config() {
        let config = ApiConfig::default();
        assert_eq!(
            config.base_url.as_str(),
            "https://jsonplaceholder.typicode.com/"
        );
    }

    #[test]
    fn test_photo_dto_reads_camel_case() {
        let dto: PhotoDto = serde_json::from_value(json!({
            "albumId": 1,
            "id": 7,
            "title": "officia porro iure quia iusto qui ipsa ut modi",
            "url": "https://via.placeholder.com/600/24f355",
            "thumbnailUrl": "https://via.placeholder.com/150/24f355"
        }))
        .unwrap();

        let photo = Photo::from(dto);
        assert_eq!(photo.id, 7);
        assert_eq!(photo.album_id, 1);
        assert_eq!(photo.thumbnail_url, "https://via.placeholder.com/150/24f355");
    }

    #[test]
    fn test_comment_dto_reads_camel_case() {
        let dto: CommentDto = serde_json::from_value(json!({
            "postId": 3,
            "id": 11,
            "name": "fugit labore quia mollitia",
            "email": "Veronica_Goodwin@timmothy.net",
            "body": "ut dolorum nostrum id quia aut est"
        }))
        .unwrap();

        let comment = Comment::from(dto);
        assert_eq!(comment.post_id, 3);
        assert_eq!(comment.id, 11);
        assert_eq!(comment.email, "Veronica_Goodwin@timmothy.net");
    }

    #[test]
    fn test_photo_dto_missing_field_is_error() {
        let result: Result<PhotoDto, _> = serde_json::from_value(json!({
            "albumId": 1,
            "id": 7,
            "title": "no urls"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let dto: CommentDto = serde_json::from_value(json!({
            "postId": 1,
            "id": 1,
            "name": "n",
            "email": "e",
            "body": "b",
            "extra": true
        }))
        .unwrap();
        assert_eq!(dto.name, "n");
    }
}
