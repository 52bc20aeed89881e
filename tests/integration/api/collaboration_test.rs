//! Sharing and comment API integration tests

use axum::http::StatusCode;
use axum_test::TestResponse;
use daybook::backend::collaboration::db::get_comment_by_id;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{id_of, spawn_app, TestApp};

async fn share(app: &TestApp, token: &str, entry_id: Uuid, email: &str) -> TestResponse {
    app.server
        .post("/api/collaboration/share")
        .authorization_bearer(token)
        .json(&json!({"entryId": entry_id, "email": email}))
        .await
}

#[tokio::test]
async fn test_share_without_edit_then_with_edit() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;
    let entry = app.create_entry(&ada, "2025-06-01", "Plain", "an ordinary day").await;
    let entry_id = id_of(&entry);
    let path = format!("/api/entries/{}", entry_id);
    let update = json!({"date": "2025-06-01", "title": "Joy", "content": "amazing wonderful happy day"});

    let share = app
        .server
        .post("/api/collaboration/share")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": entry_id, "email": "bob@example.com"}))
        .await;
    share.assert_status_ok();
    assert_eq!(share.json::<Value>()["message"], "Entry shared successfully");

    let view = app.server.get(&path).authorization_bearer(&bob.token).await;
    view.assert_status_ok();
    let denied = app.server.put(&path).authorization_bearer(&bob.token).json(&update).await;
    denied.assert_status(StatusCode::FORBIDDEN);

    let unshare = app
        .server
        .post("/api/collaboration/unshare")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": entry_id, "userId": bob.id}))
        .await;
    unshare.assert_status_ok();
    let hidden = app.server.get(&path).authorization_bearer(&bob.token).await;
    hidden.assert_status(StatusCode::FORBIDDEN);

    let reshare = app
        .server
        .post("/api/collaboration/share")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": entry_id, "email": "bob@example.com", "canEdit": true}))
        .await;
    reshare.assert_status_ok();

    let updated = app.server.put(&path).authorization_bearer(&bob.token).json(&update).await;
    updated.assert_status_ok();
    let data = updated.json::<Value>()["data"].clone();
    assert_eq!(data["title"], "Joy");
    assert_ne!(data["mood"], entry["mood"]);
    assert!(data["sentiment"]["score"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_share_rejections() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;
    let entry_id = id_of(&app.create_entry(&ada, "2025-06-01", "Mine", "x").await);

    let own = share(&app, &ada.token, entry_id, "ada@example.com").await;
    own.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(own.json::<Value>()["message"], "Cannot share with yourself");

    let nobody = share(&app, &ada.token, entry_id, "nobody@example.com").await;
    nobody.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(nobody.json::<Value>()["message"], "User with this email not found");

    let not_owner = share(&app, &bob.token, entry_id, "ada@example.com").await;
    not_owner.assert_status(StatusCode::NOT_FOUND);

    share(&app, &ada.token, entry_id, "bob@example.com").await.assert_status_ok();
    let duplicate = share(&app, &ada.token, entry_id, "BOB@example.com").await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.json::<Value>()["message"], "Entry already shared with this user");

    let entry = app
        .server
        .get(&format!("/api/entries/{}", entry_id))
        .authorization_bearer(&ada.token)
        .await;
    assert_eq!(entry.json::<Value>()["data"]["sharedWith"], json!([bob.id]));
}

#[tokio::test]
async fn test_shared_with_me_carries_owner() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;
    let entry_id = id_of(&app.create_entry(&ada, "2025-06-01", "For Bob", "x").await);

    app.server
        .post("/api/collaboration/share")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": entry_id, "email": "bob@example.com"}))
        .await
        .assert_status_ok();

    let response = app
        .server
        .get("/api/collaboration/shared-with-me")
        .authorization_bearer(&bob.token)
        .await;
    response.assert_status_ok();
    let data = response.json::<Value>()["data"].clone();
    assert_eq!(data.as_array().unwrap().len(), 1);
    assert_eq!(data[0]["title"], "For Bob");
    assert_eq!(data[0]["owner"]["firstName"], "Ada");
    assert_eq!(data[0]["owner"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_comment_lifecycle() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;
    let eve = app.signup("Eve", "eve@example.com").await;
    let entry_id = id_of(&app.create_entry(&ada, "2025-06-01", "Talk", "x").await);

    app.server
        .post("/api/collaboration/share")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": entry_id, "email": "bob@example.com"}))
        .await
        .assert_status_ok();

    let stranger = app
        .server
        .post("/api/collaboration/comment")
        .authorization_bearer(&eve.token)
        .json(&json!({"entryId": entry_id, "content": "hi"}))
        .await;
    stranger.assert_status(StatusCode::FORBIDDEN);

    let empty = app
        .server
        .post("/api/collaboration/comment")
        .authorization_bearer(&bob.token)
        .json(&json!({"entryId": entry_id, "content": "   "}))
        .await;
    empty.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(empty.json::<Value>()["message"], "Comment cannot be empty");

    let added = app
        .server
        .post("/api/collaboration/comment")
        .authorization_bearer(&bob.token)
        .json(&json!({"entryId": entry_id, "content": "Nice entry"}))
        .await;
    added.assert_status(StatusCode::CREATED);
    let comment = added.json::<Value>()["data"].clone();
    assert_eq!(comment["authorProfile"]["firstName"], "Bob");
    let comment_id = id_of(&comment);

    let listed = app
        .server
        .get(&format!("/api/collaboration/comments/{}", entry_id))
        .authorization_bearer(&ada.token)
        .await;
    listed.assert_status_ok();
    assert_eq!(listed.json::<Value>()["data"][0]["content"], "Nice entry");

    let hidden = app
        .server
        .get(&format!("/api/collaboration/comments/{}", entry_id))
        .authorization_bearer(&eve.token)
        .await;
    hidden.assert_status(StatusCode::FORBIDDEN);

    let path = format!("/api/collaboration/comment/{}", comment_id);
    let by_owner = app.server.delete(&path).authorization_bearer(&ada.token).await;
    by_owner.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(by_owner.json::<Value>()["message"], "You can only delete your own comments");

    let by_author = app.server.delete(&path).authorization_bearer(&bob.token).await;
    by_author.assert_status_ok();
    let again = app.server.delete(&path).authorization_bearer(&bob.token).await;
    again.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comments_outlive_their_entry() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let entry_id = id_of(&app.create_entry(&ada, "2025-06-01", "Brief", "x").await);

    let added = app
        .server
        .post("/api/collaboration/comment")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": entry_id, "content": "note to self"}))
        .await;
    let comment_id = id_of(&added.json::<Value>()["data"]);

    app.server
        .delete(&format!("/api/entries/{}", entry_id))
        .authorization_bearer(&ada.token)
        .await
        .assert_status_ok();
    app.server
        .get(&format!("/api/entries/{}", entry_id))
        .authorization_bearer(&ada.token)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let comment = get_comment_by_id(&app.state.db, comment_id).await.unwrap().unwrap();
    assert_eq!(comment.entry_id, entry_id);
    assert_eq!(comment.content, "note to self");
}

#[tokio::test]
async fn test_share_with_malformed_entry_id_is_json_error() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;

    let response = app
        .server
        .post("/api/collaboration/share")
        .authorization_bearer(&ada.token)
        .json(&json!({"entryId": "not-a-uuid", "email": "bob@example.com"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Please provide a valid request body!"})
    );
}

#[tokio::test]
async fn test_comments_for_malformed_entry_id_is_bad_request() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;

    let response = app
        .server
        .get("/api/collaboration/comments/not-a-uuid")
        .authorization_bearer(&ada.token)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Please provide a valid id!");
}
