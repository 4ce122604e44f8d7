use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Icon used when an event is created without one.
pub const DEFAULT_ICON: &str = "heart";

/// Icons the client knows how to draw. Anything else falls back to a
/// default glyph on the client side.
pub const KNOWN_ICONS: &[&str] = &["heart", "star", "ring", "flag", "calendar"];

/// A milestone on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: i64,
    pub title: String,
    pub description: String,

    #[serde(with = "super::timestamp")]
    pub date: DateTime<Utc>,

    pub icon: String,
}

/// Client-supplied fields of a [`TimelineEvent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertTimelineEvent {
    pub title: String,
    pub description: String,

    #[serde(with = "super::timestamp")]
    pub date: DateTime<Utc>,

    pub icon: String,
}

impl InsertTimelineEvent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date,
            icon: DEFAULT_ICON.to_string(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn into_timeline_event(self, id: i64) -> TimelineEvent {
        TimelineEvent {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            icon: self.icon,
        }
    }
}

/// Whether the client has a dedicated glyph for `icon`.
pub fn is_known_icon(icon: &str) -> bool {
    KNOWN_ICONS.contains(&icon)
}
