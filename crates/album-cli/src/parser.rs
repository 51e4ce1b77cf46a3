//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for browsing photos and their comments.
#[derive(Parser)]
#[command(name = "album")]
#[command(about = "Browse photos and their comments")]
#[command(version)]
pub struct Cli {
    /// Base URL of the photo/comment API
    #[arg(long = "api-base-url", env = "ALBUM_API_BASE_URL", global = true)]
    pub api_base_url: Option<String>,

    /// Path to the local comment database
    #[arg(long = "db-path", env = "ALBUM_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment_commands::CommentCommand;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "album",
            "--verbose",
            "--api-base-url",
            "http://localhost:3000",
            "--db-path",
            "/tmp/album.db",
            "photos",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/album.db")));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["album", "show", "3", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Show { photo_id: 3 })));
    }

    #[test]
    fn test_photos_limit() {
        let cli = Cli::parse_from(["album", "photos", "--limit", "5"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Photos { limit: Some(5) })
        ));
    }

    #[test]
    fn test_comment_add_args() {
        let cli = Cli::parse_from([
            "album", "comment", "add", "7", "--name", "Ann", "--email", "ann@example.com",
            "--body", "Lovely",
        ]);
        let Some(Commands::Comment {
            command:
                CommentCommand::Add {
                    photo_id,
                    name,
                    email,
                    body,
                },
        }) = cli.command
        else {
            panic!("expected comment add");
        };
        assert_eq!(photo_id, 7);
        assert_eq!(name, "Ann");
        assert_eq!(email, "ann@example.com");
        assert_eq!(body, "Lovely");
    }

    #[test]
    fn test_comment_add_requires_body() {
        let result = Cli::try_parse_from([
            "album", "comment", "add", "7", "--name", "Ann", "--email", "a@b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_photo_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["album", "comments", "seven"]).is_err());
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::parse_from(["album"]);
        assert!(cli.command.is_none());
    }
}
