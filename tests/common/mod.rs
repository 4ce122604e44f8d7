#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use keepsake::error::{KeepsakeError, Result};
use keepsake::model::{
    InsertLoveNote, InsertMemory, InsertTimelineEvent, LoveNote, Memory, TimelineEvent,
};
use keepsake::storage::{InMemoryStorage, SqliteStorage, Storage};

/// A backend whose every call fails, for exercising the 500 path.
pub struct BrokenStorage;

fn broken<T>() -> Result<T> {
    Err(KeepsakeError::Storage("backend unavailable".to_string()))
}

#[async_trait]
impl Storage for BrokenStorage {
    async fn list_memories(&self) -> Result<Vec<Memory>> {
        broken()
    }
    async fn create_memory(&self, _insert: InsertMemory) -> Result<Memory> {
        broken()
    }
    async fn list_love_notes(&self) -> Result<Vec<LoveNote>> {
        broken()
    }
    async fn create_love_note(&self, _insert: InsertLoveNote) -> Result<LoveNote> {
        broken()
    }
    async fn list_timeline_events(&self) -> Result<Vec<TimelineEvent>> {
        broken()
    }
    async fn create_timeline_event(&self, _insert: InsertTimelineEvent) -> Result<TimelineEvent> {
        broken()
    }
}

/// One fresh instance of every real backend.
pub async fn backends() -> Vec<(&'static str, Arc<dyn Storage>)> {
    let sqlite = SqliteStorage::connect("sqlite::memory:", 1).await.unwrap();
    vec![
        ("in-memory", Arc::new(InMemoryStorage::new()) as Arc<dyn Storage>),
        ("sqlite", Arc::new(sqlite) as Arc<dyn Storage>),
    ]
}
