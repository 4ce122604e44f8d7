//! The request/response contract shared by the server and the client.
//!
//! Paths live here and nowhere else: the router mounts handlers on these
//! endpoints and [`crate::client::ApiClient`] issues requests against them,
//! so the two sides cannot drift apart.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{
    InsertLoveNote, InsertMemory, InsertTimelineEvent, LoveNote, Memory, TimelineEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: Method::Get,
            path,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            method: Method::Post,
            path,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

pub const INVALID_INPUT: &str = "Invalid input";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Ties an entity and its insert payload to their endpoints.
pub trait Resource {
    type Entity: DeserializeOwned + Serialize + Send;
    type Insert: Serialize + Sync;

    const LIST: Endpoint;
    const CREATE: Endpoint;

    /// Message used when a list request fails.
    const FETCH_FAILED: &'static str;

    /// Message used when a create fails and the server gave none.
    const CREATE_FAILED: &'static str;
}

pub struct Memories;

impl Resource for Memories {
    type Entity = Memory;
    type Insert = InsertMemory;

    const LIST: Endpoint = Endpoint::get("/api/memories");
    const CREATE: Endpoint = Endpoint::post("/api/memories");
    const FETCH_FAILED: &'static str = "Failed to fetch memories";
    const CREATE_FAILED: &'static str = "Failed to create memory";
}

pub struct LoveNotes;

impl Resource for LoveNotes {
    type Entity = LoveNote;
    type Insert = InsertLoveNote;

    const LIST: Endpoint = Endpoint::get("/api/love-notes");
    const CREATE: Endpoint = Endpoint::post("/api/love-notes");
    const FETCH_FAILED: &'static str = "Failed to fetch love notes";
    const CREATE_FAILED: &'static str = "Failed to send love note";
}

pub struct Timeline;

impl Resource for Timeline {
    type Entity = TimelineEvent;
    type Insert = InsertTimelineEvent;

    const LIST: Endpoint = Endpoint::get("/api/timeline");
    const CREATE: Endpoint = Endpoint::post("/api/timeline");
    const FETCH_FAILED: &'static str = "Failed to fetch timeline";
    const CREATE_FAILED: &'static str = "Failed to create timeline event";
}

/// All six endpoints, in route registration order.
pub fn endpoints() -> [Endpoint; 6] {
    [
        Memories::LIST,
        Memories::CREATE,
        LoveNotes::LIST,
        LoveNotes::CREATE,
        Timeline::LIST,
        Timeline::CREATE,
    ]
}
