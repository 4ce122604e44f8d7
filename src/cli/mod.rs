//! Command-line interface definitions using clap, and the handlers that
//! run each command.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, MemoryAction, NoteAction, TimelineAction};
