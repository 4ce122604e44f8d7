//! Data models for keepsake.
//!
//! Three independent entities, each with an insert payload type that
//! leaves out the server-assigned fields:
//!
//! - [`Memory`] / [`InsertMemory`]: a captioned photo
//! - [`LoveNote`] / [`InsertLoveNote`]: a short message
//! - [`TimelineEvent`] / [`InsertTimelineEvent`]: a milestone

mod love_note;
mod memory;
mod timeline_event;
pub mod timestamp;

pub use love_note::{DEFAULT_AUTHOR, InsertLoveNote, LoveNote, SUGGESTED_AUTHORS};
pub use memory::{InsertMemory, Memory};
pub use timeline_event::{
    DEFAULT_ICON, InsertTimelineEvent, KNOWN_ICONS, TimelineEvent, is_known_icon,
};
