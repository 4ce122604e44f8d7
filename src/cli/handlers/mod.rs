mod memories;
mod notes;
mod seed;
mod serve;
mod timeline;
mod utils;

pub use memories::handle_memories;
pub use notes::handle_notes;
pub use seed::handle_seed;
pub use serve::{ServeParams, handle_serve};
pub use timeline::handle_timeline;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use crate::client::ApiClient;
use crate::config::KeepsakeConfig;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: KeepsakeConfig,

    /// `--server` override of `client.base_url`
    pub server: Option<String>,
}

impl CommandContext {
    pub fn new(config: KeepsakeConfig, server: Option<String>) -> Self {
        Self { config, server }
    }

    pub fn base_url(&self) -> &str {
        self.server
            .as_deref()
            .unwrap_or(&self.config.client.base_url)
    }

    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(self.base_url())
            .with_context(|| format!("Invalid server URL '{}'", self.base_url()))
    }

    /// Database URL from the command line, else from config.
    pub fn database_url(&self, database_url: Option<String>) -> String {
        database_url.unwrap_or_else(|| self.config.database.url.clone())
    }
}

pub(crate) fn runtime() -> Result<Runtime> {
    Runtime::new().context("Failed to start async runtime")
}
