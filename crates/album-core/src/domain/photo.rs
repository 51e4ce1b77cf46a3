//! Photo domain type.

use serde::{Deserialize, Serialize};

/// A photo as published by the remote album API.
///
/// Photos are created only from remote responses and are never mutated
/// or persisted locally. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl Photo {
    /// Find a photo by id in a slice, returning a clone.
    #[must_use]
    pub fn find(photos: &[Self], id: i64) -> Option<Self> {
        photos.iter().find(|p| p.id == id).cloned()
    }
}
