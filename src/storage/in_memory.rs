use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::Storage;
use crate::error::Result;
use crate::model::{
    InsertLoveNote, InsertMemory, InsertTimelineEvent, LoveNote, Memory, TimelineEvent,
};

/// Rows of one table plus its id sequence.
struct Table<T> {
    rows: Vec<T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.push(row.clone());
        row
    }
}

#[derive(Default)]
struct Tables {
    memories: Table<Memory>,
    love_notes: Table<LoveNote>,
    timeline_events: Table<TimelineEvent>,
}

/// Process-local storage. Each write takes the table lock, so concurrent
/// creates are serialized the way a database would serialize them.
#[derive(Default)]
pub struct InMemoryStorage {
    tables: RwLock<Tables>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_memories(&self) -> Result<Vec<Memory>> {
        let mut memories = self.tables.read().await.memories.rows.clone();
        memories.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(memories)
    }

    async fn create_memory(&self, insert: InsertMemory) -> Result<Memory> {
        let memory = self
            .tables
            .write()
            .await
            .memories
            .insert(|id| insert.into_memory(id));
        tracing::debug!(id = memory.id, "Stored memory");
        Ok(memory)
    }

    async fn list_love_notes(&self) -> Result<Vec<LoveNote>> {
        let mut notes = self.tables.read().await.love_notes.rows.clone();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn create_love_note(&self, insert: InsertLoveNote) -> Result<LoveNote> {
        let created_at = Utc::now();
        let note = self
            .tables
            .write()
            .await
            .love_notes
            .insert(|id| insert.into_love_note(id, created_at));
        tracing::debug!(id = note.id, "Stored love note");
        Ok(note)
    }

    async fn list_timeline_events(&self) -> Result<Vec<TimelineEvent>> {
        let mut events = self.tables.read().await.timeline_events.rows.clone();
        events.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn create_timeline_event(&self, insert: InsertTimelineEvent) -> Result<TimelineEvent> {
        let event = self
            .tables
            .write()
            .await
            .timeline_events
            .insert(|id| insert.into_timeline_event(id));
        tracing::debug!(id = event.id, "Stored timeline event");
        Ok(event)
    }
}
