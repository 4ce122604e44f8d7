mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use keepsake::server::build_router;
use keepsake::storage::Storage;

use common::{BrokenStorage, backends};

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(path);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_raw(app, request.body(body).unwrap()).await
}

async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn memory(title: &str, date: &str) -> Value {
    json!({
        "title": title,
        "description": "A day to remember",
        "imageUrl": "/images/x.jpg",
        "date": date
    })
}

// =============================================================================
// Memories
// =============================================================================

#[tokio::test]
async fn test_memory_round_trip() {
    for (name, storage) in backends().await {
        let app = build_router(storage);

        let (status, created) = send(
            &app,
            "POST",
            "/api/memories",
            Some(json!({
                "title": "Beach Day",
                "description": "Fun",
                "imageUrl": "http://x/y.jpg",
                "date": "2024-01-01"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{name}");
        assert_eq!(
            created,
            json!({
                "id": 1,
                "title": "Beach Day",
                "description": "Fun",
                "imageUrl": "http://x/y.jpg",
                "date": "2024-01-01T00:00:00.000Z"
            }),
            "{name}"
        );

        let (status, list) = send(&app, "GET", "/api/memories", None).await;
        assert_eq!(status, StatusCode::OK, "{name}");
        assert_eq!(list, json!([created]), "{name}");
    }
}

#[tokio::test]
async fn test_memories_newest_first() {
    for (name, storage) in backends().await {
        let app = build_router(storage);
        for (title, date) in [
            ("june", "2023-06-15"),
            ("august", "2023-08-20"),
            ("october", "2023-10-10"),
        ] {
            let (status, _) = send(&app, "POST", "/api/memories", Some(memory(title, date))).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, list) = send(&app, "GET", "/api/memories", None).await;
        let titles: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["october", "august", "june"], "{name}");
    }
}

#[tokio::test]
async fn test_missing_field_is_rejected_and_not_stored() {
    for (name, storage) in backends().await {
        let app = build_router(storage.clone());

        let mut payload = memory("incomplete", "2023-01-01");
        payload.as_object_mut().unwrap().remove("imageUrl");

        let (status, body) = send(&app, "POST", "/api/memories", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{name}");
        assert_eq!(body, json!({ "message": "Invalid input" }));
        assert!(storage.list_memories().await.unwrap().is_empty(), "{name}");
    }
}

#[tokio::test]
async fn test_dates_beyond_four_digit_years_are_rejected() {
    for (name, storage) in backends().await {
        let app = build_router(storage.clone());

        for millis in [253_402_300_800_000i64, -62_198_755_200_000i64] {
            let mut payload = memory("out of range", "2023-01-01");
            payload["date"] = json!(millis);
            let (status, body) = send(&app, "POST", "/api/memories", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{name} {millis}");
            assert_eq!(body["message"], "Invalid input");
        }

        for (title, date) in [
            ("now", "2023-01-01"),
            ("far", "9999-12-31"),
            ("ancient", "0000-01-01"),
        ] {
            let (status, _) = send(&app, "POST", "/api/memories", Some(memory(title, date))).await;
            assert_eq!(status, StatusCode::CREATED, "{name} {title}");
        }

        let (_, list) = send(&app, "GET", "/api/memories", None).await;
        let titles: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["far", "now", "ancient"], "{name}");
    }
}

#[tokio::test]
async fn test_wrong_type_is_rejected() {
    let (_, storage) = backends().await.remove(0);
    let app = build_router(storage.clone());

    let mut payload = memory("typed", "2023-01-01");
    payload["date"] = json!({ "year": 2023 });

    let (status, body) = send(&app, "POST", "/api/memories", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input");
    assert!(storage.list_memories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_invalid_input() {
    let (_, storage) = backends().await.remove(0);
    let app = build_router(storage);

    let request = Request::builder()
        .method("POST")
        .uri("/api/memories")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let (status, body) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid input" }));
}

#[tokio::test]
async fn test_missing_content_type_is_invalid_input() {
    let (_, storage) = backends().await.remove(0);
    let app = build_router(storage);

    let request = Request::builder()
        .method("POST")
        .uri("/api/love-notes")
        .body(Body::from(json!({ "content": "hi" }).to_string()))
        .unwrap();
    let (status, body) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input");
}

// =============================================================================
// Love notes
// =============================================================================

#[tokio::test]
async fn test_love_note_author_defaults_to_anonymous() {
    for (name, storage) in backends().await {
        let app = build_router(storage);

        let (status, note) = send(
            &app,
            "POST",
            "/api/love-notes",
            Some(json!({ "content": "Thinking of you" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{name}");
        assert_eq!(note["author"], "Anonymous", "{name}");
        assert_eq!(note["content"], "Thinking of you");
        assert_eq!(note["id"], 1);
        assert!(note["createdAt"].as_str().unwrap().ends_with('Z'));
    }
}

#[tokio::test]
async fn test_love_note_ignores_client_supplied_server_fields() {
    let (_, storage) = backends().await.remove(0);
    let app = build_router(storage);

    let (status, note) = send(
        &app,
        "POST",
        "/api/love-notes",
        Some(json!({
            "id": 42,
            "content": "sneaky",
            "author": "You",
            "createdAt": "1999-01-01T00:00:00.000Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(note["id"], 1);
    assert_eq!(note["author"], "You");
    assert_ne!(note["createdAt"], "1999-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn test_love_notes_newest_first() {
    for (name, storage) in backends().await {
        let app = build_router(storage);
        for content in ["first", "second", "third"] {
            send(&app, "POST", "/api/love-notes", Some(json!({ "content": content }))).await;
        }

        let (status, list) = send(&app, "GET", "/api/love-notes", None).await;
        assert_eq!(status, StatusCode::OK);
        let contents: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["content"].as_str().unwrap())
            .collect();
        assert_eq!(contents, vec!["third", "second", "first"], "{name}");
    }
}

// =============================================================================
// Timeline
// =============================================================================

#[tokio::test]
async fn test_timeline_icon_defaults_to_heart() {
    for (name, storage) in backends().await {
        let app = build_router(storage);

        let (status, event) = send(
            &app,
            "POST",
            "/api/timeline",
            Some(json!({
                "title": "First Date",
                "description": "Dinner and a movie",
                "date": "2023-01-15"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{name}");
        assert_eq!(event["icon"], "heart", "{name}");
        assert_eq!(event["date"], "2023-01-15T00:00:00.000Z");
    }
}

#[tokio::test]
async fn test_timeline_oldest_first_regardless_of_insert_order() {
    for (name, storage) in backends().await {
        let app = build_router(storage);
        for (title, date, icon) in [
            ("official", "2023-02-14", "ring"),
            ("met", "2023-01-01", "star"),
            ("date", "2023-01-15", "unicorn"),
        ] {
            let (status, _) = send(
                &app,
                "POST",
                "/api/timeline",
                Some(json!({ "title": title, "description": "d", "date": date, "icon": icon })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, list) = send(&app, "GET", "/api/timeline", None).await;
        let titles: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["met", "date", "official"], "{name}");
        assert_eq!(list[1]["icon"], "unicorn");
    }
}

#[tokio::test]
async fn test_timeline_missing_title() {
    let (_, storage) = backends().await.remove(0);
    let app = build_router(storage.clone());

    let (status, _) = send(
        &app,
        "POST",
        "/api/timeline",
        Some(json!({ "description": "d", "date": "2023-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(storage.list_timeline_events().await.unwrap().is_empty());
}

// =============================================================================
// Failures and routing
// =============================================================================

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let app = build_router(Arc::new(BrokenStorage));

    for path in ["/api/memories", "/api/love-notes", "/api/timeline"] {
        let (status, body) = send(&app, "GET", path, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "GET {path}");
        assert_eq!(body, json!({ "message": "Internal server error" }));
    }

    let (status, body) = send(
        &app,
        "POST",
        "/api/love-notes",
        Some(json!({ "content": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_validation_runs_before_storage() {
    let app = build_router(Arc::new(BrokenStorage));

    let (status, body) = send(&app, "POST", "/api/timeline", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input");
}

#[tokio::test]
async fn test_unsupported_method() {
    let (_, storage) = backends().await.remove(0);
    let app = build_router(storage);

    let (status, _) = send(&app, "DELETE", "/api/memories", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path() {
    let (_, storage) = backends().await.remove(0);
    let app = build_router(storage);

    let (status, _) = send(&app, "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
