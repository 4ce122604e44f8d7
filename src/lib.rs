//! # Keepsake - memories, a timeline and a love-note jar
//!
//! Keepsake is a small relationship app backend. It persists three kinds of
//! records and serves them over a JSON API, and it ships a typed client and
//! a CLI that talks to either side.
//!
//! ## Features
//!
//! - **JSON API**: list and create memories, love notes and timeline events
//! - **Validation**: untyped request bodies are checked field by field before
//!   anything is stored
//! - **Pluggable storage**: SQLite through sqlx, or an in-process store
//! - **Client**: reqwest-based, with a per-path query cache that is dropped
//!   after every successful write
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (seeds demo rows into an empty database)
//! keepsake serve --port 5000
//!
//! # Add a memory
//! keepsake memories add -t "Beach Day" -d "Fun" -i http://x/y.jpg --date 2024-01-01
//!
//! # Read the jar
//! keepsake notes list
//! ```
//!
//! ## Modules
//!
//! - [`api`]: Shared request/response contract
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`client`]: HTTP client with query cache
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`model`]: Entities and insert payloads
//! - [`server`]: axum routes, seed routine and serve loop
//! - [`storage`]: Persistence gateway and backends
//! - [`validation`]: Insert payload validation

/// Shared request/response contract.
///
/// Method and path of every endpoint, plus the error body shape.
pub mod api;

/// Command-line interface definitions using clap.
pub mod cli;

/// HTTP client for the keepsake API.
pub mod client;

/// Configuration loading and management.
///
/// Handles `keepsake.toml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `KeepsakeError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for keepsake.
///
/// Includes `Memory`, `LoveNote` and `TimelineEvent` with their insert payloads.
pub mod model;

/// HTTP server: router, handlers and seed routine.
pub mod server;

/// Persistence gateway.
///
/// The `Storage` trait and its SQLite and in-memory backends.
pub mod storage;

/// Input validation utilities.
///
/// Turns untyped JSON bodies into insert payloads or field-level errors.
pub mod validation;
