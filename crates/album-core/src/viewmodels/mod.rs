//! View-models: observable state plus the operations screens call.
//!
//! Each view-model owns its state containers and is their only writer.
//! Screens subscribe through `watch` receivers and never mutate state
//! directly. Dropping a view-model cancels its in-flight fetches.

mod comment;
mod photo;

pub use comment::CommentViewModel;
pub use photo::PhotoViewModel;
