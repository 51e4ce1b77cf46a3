//! Photo repository - pass-through over the remote API port.

use std::sync::Arc;

use tracing::debug;

use crate::domain::Photo;
use crate::ports::{AlbumApiPort, RemoteError};

/// Repository for photos.
///
/// No caching and no transformation: every call goes to the remote API
/// and errors come back unchanged.
#[derive(Clone)]
pub struct PhotoRepository {
    api: Arc<dyn AlbumApiPort>,
}

impl PhotoRepository {
    /// Create a new photo repository.
    pub fn new(api: Arc<dyn AlbumApiPort>) -> Self {
        Self { api }
    }

    /// Fetch all photos in server order.
    pub async fn get_photos(&self) -> Result<Vec<Photo>, RemoteError> {
        let photos = self.api.fetch_photos().await?;
        debug!(count = photos.len(), "Fetched photos");
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockAlbumApiPort;

    fn photo(id: i64) -> Photo {
        Photo {
            id,
            album_id: 1,
            title: "a".to_string(),
            url: "u1".to_string(),
            thumbnail_url: "t1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_photos_delegates_to_api() {
        let mut api = MockAlbumApiPort::new();
        api.expect_fetch_photos()
            .times(1)
            .returning(|| Ok(vec![photo(1), photo(2)]));

        let repo = PhotoRepository::new(Arc::new(api));
        let photos = repo.get_photos().await.unwrap();

        assert_eq!(photos, vec![photo(1), photo(2)]);
    }

    #[tokio::test]
    async fn test_get_photos_propagates_error_unchanged() {
        let mut api = MockAlbumApiPort::new();
        api.expect_fetch_photos().returning(|| {
            Err(RemoteError::Status {
                status: 502,
                url: "https://api/photos".to_string(),
            })
        });

        let repo = PhotoRepository::new(Arc::new(api));
        let err = repo.get_photos().await.unwrap_err();

        assert_eq!(
            err,
            RemoteError::Status {
                status: 502,
                url: "https://api/photos".to_string(),
            }
        );
    }
}
