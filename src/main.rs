use anyhow::{Context, Result};
use clap::Parser;

use keepsake::cli::handlers::{
    CommandContext, ServeParams, handle_memories, handle_notes, handle_seed, handle_serve,
    handle_timeline,
};
use keepsake::cli::{Cli, Commands};
use keepsake::config::KeepsakeConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    keepsake::logging::init(cli.verbose, cli.log_file.clone());

    let config = load_config(&cli)?;
    let ctx = CommandContext::new(config, cli.server);

    match cli.command {
        Commands::Serve {
            host,
            port,
            database_url,
            no_seed,
        } => handle_serve(
            &ctx,
            ServeParams {
                host,
                port,
                database_url,
                no_seed,
            },
        ),
        Commands::Seed { database_url } => handle_seed(&ctx, database_url),
        Commands::Memories { action } => handle_memories(&ctx, action),
        Commands::Notes { action } => handle_notes(&ctx, action),
        Commands::Timeline { action } => handle_timeline(&ctx, action),
    }
}

fn load_config(cli: &Cli) -> Result<KeepsakeConfig> {
    if let Some(ref path) = cli.config {
        return KeepsakeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let cwd = std::env::current_dir()?;
    let (config, path) =
        KeepsakeConfig::discover(&cwd).context("Failed to load keepsake configuration")?;
    match path {
        Some(path) => tracing::debug!(path = %path.display(), "Using config file"),
        None => tracing::debug!("No keepsake.toml found, using defaults"),
    }
    Ok(config)
}
