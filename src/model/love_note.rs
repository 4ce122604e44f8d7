use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Author used when a note is created without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Authors the app suggests. Any text is accepted.
pub const SUGGESTED_AUTHORS: &[&str] = &["Me", "You"];

/// A short message dropped into the jar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LoveNote {
    pub id: i64,
    pub content: String,
    pub author: String,

    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields of a [`LoveNote`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertLoveNote {
    pub content: String,
    pub author: String,
}

impl InsertLoveNote {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn into_love_note(self, id: i64, created_at: DateTime<Utc>) -> LoveNote {
        LoveNote {
            id,
            content: self.content,
            author: self.author,
            created_at,
        }
    }
}
