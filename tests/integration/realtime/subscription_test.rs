//! Real-time event integration tests
//!
//! The SSE handler is driven directly and its body read frame by frame, so
//! the test controls exactly when the stream is dropped.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::State;
use axum::response::IntoResponse;
use daybook::backend::middleware::{ApiQuery, AuthUser, AuthenticatedUser};
use daybook::backend::realtime::handle_realtime_subscription;
use daybook::shared::{EventType, RealtimeEvent, UserStatus};
use futures_util::StreamExt;
use serde_json::{json, Value};
use tokio::time::timeout;
use uuid::Uuid;

use crate::common::{id_of, spawn_app};

async fn next_frame<S>(body: &mut S) -> String
where
    S: futures_util::Stream<Item = Result<axum::body::Bytes, axum::Error>> + Unpin,
{
    let chunk = timeout(Duration::from_secs(2), body.next())
        .await
        .expect("frame within timeout")
        .expect("stream still open")
        .expect("frame");
    String::from_utf8_lossy(&chunk).into_owned()
}

#[tokio::test]
async fn test_update_publishes_entry_updated() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let entry_id = id_of(&app.create_entry(&ada, "2025-06-01", "Draft", "x").await);
    let mut rx = app.state.realtime_broadcast.subscribe();

    app.server
        .put(&format!("/api/entries/{}", entry_id))
        .authorization_bearer(&ada.token)
        .json(&json!({"date": "2025-06-01", "title": "Final", "content": "x"}))
        .await
        .assert_status_ok();

    let event = rx.try_recv().unwrap();
    assert_eq!(event.event_type, EventType::EntryUpdated);
    assert_eq!(event.payload["entryId"], entry_id.to_string());
    assert_eq!(event.payload["updatedBy"], ada.id.to_string());
    assert_eq!(event.payload["entry"]["title"], "Final");
}

#[tokio::test]
async fn test_share_and_comment_publish_events() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;
    let entry_id = id_of(&app.create_entry(&ada, "2025-06-01", "Shared", "x").await);
    let mut rx = app.state.realtime_broadcast.subscribe();

    app.server
        .post("/api/collaboration/share")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": entry_id, "email": "bob@example.com", "canEdit": true}))
        .await
        .assert_status_ok();
    app.server
        .post("/api/collaboration/comment")
        .authorization_bearer(&bob.token)
        .json(&json!({"entryId": entry_id, "content": "hello"}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let shared = rx.try_recv().unwrap();
    assert_eq!(shared.event_type, EventType::EntryShared);
    assert_eq!(shared.payload["sharedWith"], bob.id.to_string());
    assert_eq!(shared.payload["canEdit"], true);

    let comment = rx.try_recv().unwrap();
    assert_eq!(comment.event_type, EventType::CommentAdded);
    assert_eq!(comment.payload["entryId"], entry_id.to_string());
    assert_eq!(comment.payload["comment"]["content"], "hello");
}

#[tokio::test]
async fn test_stream_filters_by_type() {
    let app = spawn_app().await;
    let mut query = HashMap::new();
    query.insert("types".to_string(), "comment-added".to_string());

    let response = handle_realtime_subscription(State(app.state.clone()), None, ApiQuery(query))
        .await
        .into_response();
    let mut body = response.into_body().into_data_stream();

    let tx = &app.state.realtime_broadcast;
    tx.send(RealtimeEvent::user_status(Uuid::new_v4(), UserStatus::Online)).unwrap();
    tx.send(RealtimeEvent::comment_added(Uuid::new_v4(), json!({"content": "hi"})))
        .unwrap();

    let frame = next_frame(&mut body).await;
    assert!(frame.starts_with("event: comment-added\n"), "unexpected frame: {frame}");
    let data = frame
        .lines()
        .find_map(|line| line.strip_prefix("data: "))
        .unwrap();
    let event: Value = serde_json::from_str(data).unwrap();
    assert_eq!(event["eventType"], "comment-added");
    assert_eq!(event["payload"]["comment"]["content"], "hi");
}

#[tokio::test]
async fn test_authenticated_stream_tracks_presence() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let mut rx = app.state.realtime_broadcast.subscribe();
    let auth = AuthUser(AuthenticatedUser {
        user_id: ada.id,
        email: ada.email.clone(),
    });

    let response = handle_realtime_subscription(State(app.state.clone()), Some(auth), ApiQuery(HashMap::new()))
        .await
        .into_response();
    let mut body = response.into_body().into_data_stream();
    assert!(app.state.presence.is_online(ada.id).await);

    let frame = next_frame(&mut body).await;
    assert!(frame.starts_with("event: user-status\n"));
    assert!(frame.contains("\"online\""));

    drop(body);
    let online = rx.recv().await.unwrap();
    assert_eq!(online.payload["status"], "online");
    let offline = timeout(Duration::from_secs(2), rx.recv()).await.unwrap().unwrap();
    assert_eq!(offline.payload["userId"], ada.id.to_string());
    assert_eq!(offline.payload["status"], "offline");
    assert!(!app.state.presence.is_online(ada.id).await);
}
