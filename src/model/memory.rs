use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A captioned photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,

    /// When the moment happened, as chosen by the user.
    #[serde(with = "super::timestamp")]
    pub date: DateTime<Utc>,
}

/// Client-supplied fields of a [`Memory`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMemory {
    pub title: String,
    pub description: String,
    pub image_url: String,

    #[serde(with = "super::timestamp")]
    pub date: DateTime<Utc>,
}

impl InsertMemory {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            date,
        }
    }

    pub fn into_memory(self, id: i64) -> Memory {
        Memory {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            date: self.date,
        }
    }
}
