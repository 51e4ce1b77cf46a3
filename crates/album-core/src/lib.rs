#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod repositories;
pub mod state;
pub mod viewmodels;

// Re-export commonly used types for convenience
pub use domain::{
    Comment, CommentRecord, CommentValidationError, NewComment, PendingComment, PersistedComment,
    Photo,
};
pub use events::AnalyticsEvent;
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    AlbumApiPort, AnalyticsSink, CommentStore, NoopAnalytics, RecordingAnalytics, RemoteError,
    StorageError,
};
pub use repositories::{CommentRepository, PhotoRepository};
pub use state::{FetchStatus, Observable};
pub use viewmodels::{CommentViewModel, PhotoViewModel};
