//! Domain types for the photo album.
//!
//! These types represent photos and comments independent of any
//! infrastructure concerns (HTTP wire format, `SQLite` rows).

pub mod comment;
pub mod photo;

pub use comment::{
    Comment, CommentRecord, CommentValidationError, NewComment, PendingComment, PersistedComment,
};
pub use photo::Photo;
