use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{MethodFilter, on};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use crate::api::{Endpoint, LoveNotes, Memories, Method, Resource, Timeline};
use crate::model::{
    InsertLoveNote, InsertMemory, InsertTimelineEvent, LoveNote, Memory, TimelineEvent,
};
use crate::storage::Storage;
use crate::validation::FromPayload;

/// Shared by every handler. Holds nothing but the injected gateway.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

type Payload = std::result::Result<Json<Value>, JsonRejection>;
type Created<T> = std::result::Result<(StatusCode, Json<T>), ApiError>;
type Listed<T> = std::result::Result<Json<Vec<T>>, ApiError>;

pub fn build_router(storage: Arc<dyn Storage>) -> Router {
    let state = AppState { storage };

    Router::new()
        .route(
            Memories::LIST.path,
            on(filter(Memories::LIST), list_memories)
                .on(filter(Memories::CREATE), create_memory),
        )
        .route(
            LoveNotes::LIST.path,
            on(filter(LoveNotes::LIST), list_love_notes)
                .on(filter(LoveNotes::CREATE), create_love_note),
        )
        .route(
            Timeline::LIST.path,
            on(filter(Timeline::LIST), list_timeline)
                .on(filter(Timeline::CREATE), create_timeline_event),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn filter(endpoint: Endpoint) -> MethodFilter {
    match endpoint.method {
        Method::Get => MethodFilter::GET,
        Method::Post => MethodFilter::POST,
    }
}

fn parse_payload<T: FromPayload>(payload: Payload) -> std::result::Result<T, ApiError> {
    let Json(value) = payload?;
    Ok(T::from_payload(&value)?)
}

async fn list_memories(State(state): State<AppState>) -> Listed<Memory> {
    Ok(Json(state.storage.list_memories().await?))
}

async fn create_memory(State(state): State<AppState>, payload: Payload) -> Created<Memory> {
    let insert: InsertMemory = parse_payload(payload)?;
    let memory = state.storage.create_memory(insert).await?;
    tracing::info!(id = memory.id, title = %memory.title, "Created memory");
    Ok((StatusCode::CREATED, Json(memory)))
}

async fn list_love_notes(State(state): State<AppState>) -> Listed<LoveNote> {
    Ok(Json(state.storage.list_love_notes().await?))
}

async fn create_love_note(State(state): State<AppState>, payload: Payload) -> Created<LoveNote> {
    let insert: InsertLoveNote = parse_payload(payload)?;
    let note = state.storage.create_love_note(insert).await?;
    tracing::info!(id = note.id, author = %note.author, "Created love note");
    Ok((StatusCode::CREATED, Json(note)))
}

async fn list_timeline(State(state): State<AppState>) -> Listed<TimelineEvent> {
    Ok(Json(state.storage.list_timeline_events().await?))
}

async fn create_timeline_event(
    State(state): State<AppState>,
    payload: Payload,
) -> Created<TimelineEvent> {
    let insert: InsertTimelineEvent = parse_payload(payload)?;
    let event = state.storage.create_timeline_event(insert).await?;
    tracing::info!(
        id = event.id,
        title = %event.title,
        icon = %event.icon,
        "Created timeline event"
    );
    Ok((StatusCode::CREATED, Json(event)))
}
