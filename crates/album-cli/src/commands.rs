//! Main commands enum.

use clap::Subcommand;

use crate::comment_commands::CommentCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List photos from the API
    Photos {
        /// Show at most this many photos
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one photo and its comments
    Show {
        /// Photo ID
        photo_id: i64,
    },

    /// List the comments of a photo
    Comments {
        /// Photo ID
        photo_id: i64,
    },

    /// Write or inspect local comments
    Comment {
        #[command(subcommand)]
        command: CommentCommand,
    },

    /// Show resolved data paths
    Paths,
}
