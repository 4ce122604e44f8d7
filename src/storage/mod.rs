//! Persistence gateway for keepsake.
//!
//! The route layer only ever talks to [`Storage`], six operations wide:
//! list and create for each entity. Lists come back ordered:
//!
//! - memories: newest `date` first
//! - love notes: newest `createdAt` first
//! - timeline events: oldest `date` first
//!
//! Ties fall back to insertion order (by `id`) in the same direction.
//!
//! ## Backends
//!
//! - [`InMemoryStorage`]: tables held in process, selected with `memory:`
//! - [`SqliteStorage`]: sqlx SQLite pool, selected with `sqlite:` URLs

mod in_memory;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{KeepsakeError, Result};
use crate::model::{
    InsertLoveNote, InsertMemory, InsertTimelineEvent, LoveNote, Memory, TimelineEvent,
};

pub use in_memory::InMemoryStorage;
pub use sqlite::SqliteStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_memories(&self) -> Result<Vec<Memory>>;
    async fn create_memory(&self, insert: InsertMemory) -> Result<Memory>;

    async fn list_love_notes(&self) -> Result<Vec<LoveNote>>;
    async fn create_love_note(&self, insert: InsertLoveNote) -> Result<LoveNote>;

    async fn list_timeline_events(&self) -> Result<Vec<TimelineEvent>>;
    async fn create_timeline_event(&self, insert: InsertTimelineEvent) -> Result<TimelineEvent>;
}

/// Opens the backend named by `database_url`.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<Arc<dyn Storage>> {
    if database_url == "memory:" {
        tracing::info!("Using in-memory storage");
        return Ok(Arc::new(InMemoryStorage::new()));
    }
    if database_url.starts_with("sqlite:") {
        let storage = SqliteStorage::connect(database_url, max_connections).await?;
        return Ok(Arc::new(storage));
    }
    Err(KeepsakeError::Config(format!(
        "Unsupported database URL '{}' (expected 'memory:' or 'sqlite:...')",
        database_url
    )))
}
