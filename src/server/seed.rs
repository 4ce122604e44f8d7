//! Demo rows inserted on first boot.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{KeepsakeError, Result};
use crate::model::{InsertLoveNote, InsertMemory, InsertTimelineEvent};
use crate::storage::Storage;

/// (title, description, image, (year, month, day))
const MEMORIES: &[(&str, &str, &str, (i32, u32, u32))] = &[
    (
        "So Beautiful",
        "One of my favorite photos of you. Those eyes! 😍",
        "/images/her1.jpg",
        (2023, 6, 15),
    ),
    (
        "Your Smile",
        "The way you light up my world every single day.",
        "/images/her2.jpg",
        (2023, 8, 20),
    ),
    (
        "Always Stunning",
        "No matter what you're doing, you always look amazing.",
        "/images/her3.jpg",
        (2023, 10, 10),
    ),
];

/// (title, description, (year, month, day), icon)
const TIMELINE_EVENTS: &[(&str, &str, (i32, u32, u32), &str)] = &[
    ("First Met", "The day our paths crossed.", (2023, 1, 1), "star"),
    (
        "First Date",
        "Dinner and a movie, classic but perfect.",
        (2023, 1, 15),
        "heart",
    ),
    ("Made it Official", "Best day ever.", (2023, 2, 14), "ring"),
];

/// (content, author)
const LOVE_NOTES: &[(&str, &str)] = &[
    ("You are my sunshine on a cloudy day ☀️", "Me"),
    ("Can't wait to see you later! ❤️", "Me"),
];

/// What a seed run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub memories: usize,
    pub timeline_events: usize,
    pub love_notes: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.memories == 0 && self.timeline_events == 0 && self.love_notes == 0
    }
}

/// Midnight UTC of a literal seed date.
fn day((year, month, day): (i32, u32, u32)) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            KeepsakeError::Config(format!("Seed data has an invalid date {year}-{month}-{day}"))
        })
}

/// Inserts the demo rows if the memories table is empty.
///
/// Only memories are checked. The check and the inserts are not atomic, so
/// two processes starting at once against one database could both seed.
pub async fn seed_if_empty(storage: &dyn Storage) -> Result<SeedReport> {
    if !storage.list_memories().await?.is_empty() {
        tracing::debug!("Store already has memories, skipping seed");
        return Ok(SeedReport::default());
    }

    tracing::info!("Seeding database...");
    let mut report = SeedReport::default();

    for &(title, description, image_url, date) in MEMORIES {
        storage
            .create_memory(InsertMemory::new(title, description, image_url, day(date)?))
            .await?;
        report.memories += 1;
    }

    for &(title, description, date, icon) in TIMELINE_EVENTS {
        storage
            .create_timeline_event(
                InsertTimelineEvent::new(title, description, day(date)?).with_icon(icon),
            )
            .await?;
        report.timeline_events += 1;
    }

    for &(content, author) in LOVE_NOTES {
        storage
            .create_love_note(InsertLoveNote::new(content).with_author(author))
            .await?;
        report.love_notes += 1;
    }

    tracing::info!(
        memories = report.memories,
        timeline_events = report.timeline_events,
        love_notes = report.love_notes,
        "Database seeded"
    );
    Ok(report)
}
