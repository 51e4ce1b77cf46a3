//! Comment subcommands.

use clap::Subcommand;

/// Comment commands.
#[derive(Subcommand)]
pub enum CommentCommand {
    /// Add a comment to a photo and store it locally
    Add {
        /// Photo ID
        photo_id: i64,
        /// Author name
        #[arg(long)]
        name: String,
        /// Author email
        #[arg(long)]
        email: String,
        /// Comment text
        #[arg(long)]
        body: String,
    },
    /// List comments stored on this machine for a photo
    Local {
        /// Photo ID
        photo_id: i64,
    },
}
