use anyhow::{Context, Result};

use crate::server::run_server;
use crate::storage;

use super::{CommandContext, runtime};

/// Command-line overrides for the `[server]` and `[database]` settings
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub no_seed: bool,
}

pub fn handle_serve(ctx: &CommandContext, params: ServeParams) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(host) = params.host {
        settings.host = host;
    }
    if let Some(port) = params.port {
        settings.port = port;
    }
    if params.no_seed {
        settings.seed = false;
    }
    let database_url = ctx.database_url(params.database_url);

    println!("Starting keepsake API on http://{}", settings.bind_address());

    runtime()?.block_on(async {
        let storage = storage::connect(&database_url, ctx.config.database.max_connections)
            .await
            .with_context(|| format!("Failed to open database '{}'", database_url))?;
        run_server(storage, &settings)
            .await
            .context("Server error")
    })
}
