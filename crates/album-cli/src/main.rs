//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers, which drive the core view-models.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use album_cli::{Cli, CliConfig, CliContext, Commands, CommentCommand, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Paths must work even when the database cannot be opened
    if matches!(command, Commands::Paths) {
        return handlers::paths::execute(&config);
    }

    let ctx = bootstrap(config).await?;
    dispatch(&ctx, command).await
}

async fn dispatch(ctx: &CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Photos { limit } => {
            handlers::photos::execute(ctx, limit).await?;
        }
        Commands::Show { photo_id } => {
            handlers::show::execute(ctx, photo_id).await?;
        }
        Commands::Comments { photo_id } => {
            handlers::comments::execute(ctx, photo_id).await?;
        }
        Commands::Comment { command } => match command {
            CommentCommand::Add {
                photo_id,
                name,
                email,
                body,
            } => {
                let args = handlers::comment_add::AddArgs {
                    photo_id,
                    name,
                    email,
                    body,
                };
                handlers::comment_add::execute(ctx, args).await?;
            }
            CommentCommand::Local { photo_id } => {
                handlers::comment_local::execute(ctx, photo_id).await?;
            }
        },
        // Handled before bootstrap
        Commands::Paths => {}
    }

    Ok(())
}
