#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod analytics;
pub mod bootstrap;
pub mod commands;
pub mod comment_commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use analytics::TracingAnalytics;
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use comment_commands::CommentCommand;
pub use parser::Cli;
