//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Implementations map their own errors to the port error types
//! - Traits stay minimal: exactly what the view-models need

pub mod analytics;
pub mod comment_store;
pub mod remote;

pub use analytics::{AnalyticsSink, NoopAnalytics, RecordingAnalytics};
pub use comment_store::{CommentStore, StorageError};
pub use remote::{AlbumApiPort, RemoteError};

#[cfg(test)]
pub use remote::MockAlbumApiPort;
