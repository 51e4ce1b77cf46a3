//! Shared CLI presentation utilities.
//!
//! Format-only helpers. Domain decisions stay in the view-models.

pub mod comment_display;
pub mod tables;

// Re-export commonly used items
pub use comment_display::{comment_origin, print_comments};
pub use tables::{print_separator, truncate_string};
