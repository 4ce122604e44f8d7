use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::Storage;
use crate::error::Result;
use crate::model::{
    InsertLoveNote, InsertMemory, InsertTimelineEvent, LoveNote, Memory, TimelineEvent,
};

const MEMORY_COLUMNS: &str = "id, title, description, image_url, date";
const LOVE_NOTE_COLUMNS: &str = "id, content, author, created_at";
const TIMELINE_EVENT_COLUMNS: &str = "id, title, description, date, icon";

/// SQLite-backed storage. The schema is applied from the embedded
/// migrations when the pool is opened.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty
        // database, so keep exactly one alive for the lifetime of the pool.
        let in_memory = is_in_memory(database_url);
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!(url = %database_url, in_memory, "Opened SQLite storage");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn list_memories(&self) -> Result<Vec<Memory>> {
        let sql = format!("SELECT {MEMORY_COLUMNS} FROM memories ORDER BY date DESC, id DESC");
        let memories = sqlx::query_as::<_, Memory>(&sql).fetch_all(&self.pool).await?;
        Ok(memories)
    }

    async fn create_memory(&self, insert: InsertMemory) -> Result<Memory> {
        let sql = format!(
            "INSERT INTO memories (title, description, image_url, date) \
             VALUES (?, ?, ?, ?) RETURNING {MEMORY_COLUMNS}"
        );
        let memory = sqlx::query_as::<_, Memory>(&sql)
            .bind(&insert.title)
            .bind(&insert.description)
            .bind(&insert.image_url)
            .bind(insert.date)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(id = memory.id, "Stored memory");
        Ok(memory)
    }

    async fn list_love_notes(&self) -> Result<Vec<LoveNote>> {
        let sql =
            format!("SELECT {LOVE_NOTE_COLUMNS} FROM love_notes ORDER BY created_at DESC, id DESC");
        let notes = sqlx::query_as::<_, LoveNote>(&sql).fetch_all(&self.pool).await?;
        Ok(notes)
    }

    async fn create_love_note(&self, insert: InsertLoveNote) -> Result<LoveNote> {
        let sql = format!(
            "INSERT INTO love_notes (content, author, created_at) \
             VALUES (?, ?, ?) RETURNING {LOVE_NOTE_COLUMNS}"
        );
        let note = sqlx::query_as::<_, LoveNote>(&sql)
            .bind(&insert.content)
            .bind(&insert.author)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(id = note.id, "Stored love note");
        Ok(note)
    }

    async fn list_timeline_events(&self) -> Result<Vec<TimelineEvent>> {
        let sql = format!(
            "SELECT {TIMELINE_EVENT_COLUMNS} FROM timeline_events ORDER BY date ASC, id ASC"
        );
        let events = sqlx::query_as::<_, TimelineEvent>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    async fn create_timeline_event(&self, insert: InsertTimelineEvent) -> Result<TimelineEvent> {
        let sql = format!(
            "INSERT INTO timeline_events (title, description, date, icon) \
             VALUES (?, ?, ?, ?) RETURNING {TIMELINE_EVENT_COLUMNS}"
        );
        let event = sqlx::query_as::<_, TimelineEvent>(&sql)
            .bind(&insert.title)
            .bind(&insert.description)
            .bind(insert.date)
            .bind(&insert.icon)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(id = event.id, "Stored timeline event");
        Ok(event)
    }
}
