use anyhow::{Context, Result};
use colored::Colorize;

use crate::server::seed_if_empty;
use crate::storage;

use super::{CommandContext, runtime};

pub fn handle_seed(ctx: &CommandContext, database_url: Option<String>) -> Result<()> {
    let database_url = ctx.database_url(database_url);

    let report = runtime()?.block_on(async {
        let storage = storage::connect(&database_url, ctx.config.database.max_connections)
            .await
            .with_context(|| format!("Failed to open database '{}'", database_url))?;
        seed_if_empty(storage.as_ref())
            .await
            .context("Failed to seed database")
    })?;

    if report.is_empty() {
        println!("{} database already has memories", "Skipped:".yellow());
    } else {
        println!(
            "{} {} memories, {} timeline events, {} love notes",
            "Seeded".green(),
            report.memories,
            report.timeline_events,
            report.love_notes
        );
    }
    Ok(())
}
