//! Repositories wrapping the remote API port.
//!
//! Each repository exposes one fetch operation and holds the port as a
//! trait object, so view-models never depend on a concrete client.

mod comment_repository;
mod photo_repository;

pub use comment_repository::CommentRepository;
pub use photo_repository::PhotoRepository;
