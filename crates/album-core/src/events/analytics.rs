//! Analytics events raised by user interactions.

use serde::{Deserialize, Serialize};

use crate::domain::{NewComment, Photo};

/// Named analytics events with string parameters.
///
/// Event names and parameter keys follow the conventional analytics
/// vocabulary (`select_content`, `item_id`, ...), so sinks can forward
/// them to a vendor SDK unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// The user opened an item from a list.
    SelectContent {
        item_id: String,
        item_name: String,
        content_type: String,
    },

    /// The user submitted a comment.
    AddComment {
        photo_id: String,
        comment_name: String,
    },
}

impl AnalyticsEvent {
    /// Event for a photo tapped in the grid.
    pub fn photo_selected(photo: &Photo) -> Self {
        Self::SelectContent {
            item_id: photo.id.to_string(),
            item_name: photo.title.clone(),
            content_type: "photo".to_string(),
        }
    }

    /// Event for a comment submitted from the detail view.
    pub fn comment_added(comment: &NewComment) -> Self {
        Self::AddComment {
            photo_id: comment.post_id.to_string(),
            comment_name: comment.name.clone(),
        }
    }

    /// The wire name of the event.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectContent { .. } => "select_content",
            Self::AddComment { .. } => "add_comment",
        }
    }

    /// The event parameters as key/value pairs.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::SelectContent {
                item_id,
                item_name,
                content_type,
            } => vec![
                ("item_id", item_id.clone()),
                ("item_name", item_name.clone()),
                ("content_type", content_type.clone()),
            ],
            Self::AddComment {
                photo_id,
                comment_name,
            } => vec![
                ("photo_id", photo_id.clone()),
                ("comment_name", comment_name.clone()),
            ],
        }
    }
}
