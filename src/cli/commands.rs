use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::model::timestamp;

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(
    author,
    version,
    about = "Memories, a timeline and a love-note jar, served over a small JSON API"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for keepsake.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of a running keepsake server (overrides config)
    #[arg(long, global = true, env = "KEEPSAKE_SERVER")]
    pub server: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Database connection string ('memory:' or 'sqlite://...')
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,

        /// Do not insert demo rows into an empty store
        #[arg(long)]
        no_seed: bool,
    },

    /// Insert the demo rows if the store has no memories yet
    Seed {
        /// Database connection string ('memory:' or 'sqlite://...')
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
    },

    /// Captioned photos
    #[command(visible_alias = "memory")]
    Memories {
        #[command(subcommand)]
        action: MemoryAction,
    },

    /// The love-note jar
    #[command(visible_alias = "note")]
    Notes {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Milestones, oldest first
    Timeline {
        #[command(subcommand)]
        action: TimelineAction,
    },
}

#[derive(Subcommand)]
pub enum MemoryAction {
    /// List memories, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a memory
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,

        /// URL or path of the photo
        #[arg(short, long)]
        image_url: String,

        /// When it happened (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        date: DateTime<Utc>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// List notes, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drop a note into the jar
    Add {
        /// The message
        content: String,

        /// Who wrote it, usually "Me" or "You" (server default: Anonymous)
        #[arg(short, long)]
        author: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TimelineAction {
    /// List milestones, oldest first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a milestone
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,

        /// When it happened (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        date: DateTime<Utc>,

        /// One of heart, star, ring, flag, calendar (other values are kept as-is)
        #[arg(short, long)]
        icon: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    timestamp::parse(s).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}
