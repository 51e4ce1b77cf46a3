//! Events emitted by the core toward outer collaborators.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "add_comment", "photo_id": "1", "comment_name": "Ada" }
//! ```

mod analytics;

pub use analytics::AnalyticsEvent;
