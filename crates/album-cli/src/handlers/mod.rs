//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Build a view-model from the context, drive it, print its state
//!
//! Handlers should NOT:
//! - Call the HTTP client directly
//! - Contain business logic

pub mod comment_add;
pub mod comment_local;
pub mod comments;
pub mod paths;
pub mod photos;
pub mod show;
