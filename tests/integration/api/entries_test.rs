//! Journal entry API integration tests

use axum::http::{header, StatusCode};
use daybook::shared::{classify, AfinnLexicon, Mood};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{id_of, spawn_app};

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = spawn_app().await;
    let user = app.signup("Ada", "ada@example.com").await;

    let created = app
        .create_entry(&user, "2025-06-01", "Great day", "Wonderful happy sunshine with friends")
        .await;
    assert!(created["sentiment"]["score"].as_i64().unwrap() > 0);
    let mood: Mood = serde_json::from_value(created["mood"].clone()).unwrap();
    assert!(matches!(mood, Mood::Elated | Mood::Content));

    let expected = classify(
        &AfinnLexicon::new(),
        "Great day Wonderful happy sunshine with friends",
    );
    assert_eq!(mood, expected.mood);

    let fetched = app
        .server
        .get(&format!("/api/entries/{}", id_of(&created)))
        .authorization_bearer(&user.token)
        .await;
    fetched.assert_status_ok();
    let fetched = fetched.json::<Value>()["data"].clone();
    assert_eq!(fetched["title"], "Great day");
    assert_eq!(fetched["content"], "Wonderful happy sunshine with friends");
    assert_eq!(fetched["mood"], created["mood"]);
    assert_eq!(fetched["date"], "2025-06-01");
}

#[tokio::test]
async fn test_create_validation() {
    let app = spawn_app().await;
    let user = app.signup("Ada", "ada@example.com").await;

    let cases = [
        (json!({"title": "x", "content": "y"}), "Please submit with required fields!"),
        (json!({"date": "someday", "title": "x", "content": "y"}), "Please provide a valid date!"),
        (
            json!({"date": "2025-01-01", "title": "a".repeat(21), "content": "y"}),
            "Title length should not be more than 20 characters!",
        ),
    ];

    for (body, message) in cases {
        let response = app
            .server
            .post("/api/entries")
            .authorization_bearer(&user.token)
            .json(&body)
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["message"], message);
    }
}

#[tokio::test]
async fn test_streak_reported_by_me() {
    let app = spawn_app().await;
    let user = app.signup("Ada", "ada@example.com").await;

    app.create_entry(&user, "2025-06-01", "One", "first").await;
    app.create_entry(&user, "2025-06-02", "Two", "second").await;
    app.create_entry(&user, "2025-06-02", "Two again", "same day").await;

    let me = app.server.get("/api/auth/me").authorization_bearer(&user.token).await;
    let profile = me.json::<Value>()["data"].clone();
    assert_eq!(profile["currentStreak"], 2);
    assert_eq!(profile["longestStreak"], 2);
    assert_eq!(profile["lastEntryDate"], "2025-06-02");
}

#[tokio::test]
async fn test_list_is_newest_first_and_owner_scoped() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;

    app.create_entry(&ada, "2025-06-01", "Older", "a").await;
    app.create_entry(&ada, "2025-06-03", "Newer", "b").await;
    app.create_entry(&bob, "2025-06-02", "Bob's", "c").await;

    let list = app.server.get("/api/entries").authorization_bearer(&ada.token).await;
    let titles: Vec<String> = list.json::<Value>()["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let bob = app.signup("Bob", "bob@example.com").await;
    let entry = app.create_entry(&ada, "2025-06-01", "Gone soon", "bye").await;
    let path = format!("/api/entries/{}", id_of(&entry));

    let foreign = app.server.delete(&path).authorization_bearer(&bob.token).await;
    foreign.assert_status(StatusCode::NOT_FOUND);

    let deleted = app.server.delete(&path).authorization_bearer(&ada.token).await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>()["message"], "Entry deleted successfully!");

    let missing = app.server.get(&path).authorization_bearer(&ada.token).await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_favorite_toggle_accepts_patch_and_post() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    let entry = app.create_entry(&ada, "2025-06-01", "Fav", "x").await;
    let path = format!("/api/entries/{}/favorite", id_of(&entry));

    let on = app.server.patch(&path).authorization_bearer(&ada.token).await;
    assert_eq!(on.json::<Value>()["data"]["isFavorite"], true);
    let off = app.server.post(&path).authorization_bearer(&ada.token).await;
    assert_eq!(off.json::<Value>()["data"]["isFavorite"], false);
    assert_eq!(off.json::<Value>()["message"], "Entry removed from favorites!");
}

#[tokio::test]
async fn test_search() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    app.create_entry(&ada, "2025-06-01", "Beach", "Sand everywhere").await;
    app.create_entry(&ada, "2025-06-02", "Office", "Meetings").await;

    let hits = app
        .server
        .get("/api/entries/search")
        .add_query_param("text", "SAND")
        .authorization_bearer(&ada.token)
        .await;
    hits.assert_status_ok();
    let data = hits.json::<Value>()["data"].clone();
    assert_eq!(data.as_array().unwrap().len(), 1);
    assert_eq!(data[0]["title"], "Beach");

    let none = app
        .server
        .get("/api/entries/search")
        .add_query_param("text", "mountain")
        .authorization_bearer(&ada.token)
        .await;
    assert_eq!(none.json::<Value>()["message"], "No entries found!");

    let blank = app.server.get("/api/entries/search").authorization_bearer(&ada.token).await;
    blank.assert_status(StatusCode::BAD_REQUEST);

    let long = app
        .server
        .get("/api/entries/search")
        .add_query_param("text", "x".repeat(101))
        .authorization_bearer(&ada.token)
        .await;
    long.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_analytics() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    app.create_entry(&ada, "2025-05-01", "May", "plain").await;
    app.create_entry(&ada, "2025-06-01", "June", "plain").await;

    let response = app
        .server
        .get("/api/entries/analytics")
        .authorization_bearer(&ada.token)
        .await;
    response.assert_status_ok();
    let data = response.json::<Value>()["data"].clone();
    assert_eq!(data["totalEntries"], 2);
    assert_eq!(data["monthlyTrend"][0]["month"], "2025-05");
    assert_eq!(data["monthlyTrend"][1]["month"], "2025-06");
}

#[tokio::test]
async fn test_export() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;

    let empty = app.server.get("/api/entries/export").authorization_bearer(&ada.token).await;
    empty.assert_status(StatusCode::NOT_FOUND);

    app.create_entry(&ada, "2025-06-01", "Exported", "body text").await;

    let markdown = app
        .server
        .get("/api/entries/export")
        .add_query_param("format", "markdown")
        .authorization_bearer(&ada.token)
        .await;
    markdown.assert_status_ok();
    let disposition = markdown.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"daybook-entries-"));
    assert!(disposition.ends_with(".md\""));
    assert!(markdown.text().contains("Exported"));

    let bad = app
        .server
        .get("/api/entries/export")
        .add_query_param("format", "pdf")
        .authorization_bearer(&ada.token)
        .await;
    bad.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_entry_id_is_bad_request() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;

    let response = app
        .server
        .get("/api/entries/not-a-uuid")
        .authorization_bearer(&ada.token)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"message": "Please provide a valid id!"}));

    let response = app
        .server
        .put("/api/entries/not-a-uuid")
        .authorization_bearer(&ada.token)
        .json(&json!({"date": "2025-06-01", "title": "x", "content": "y"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mistyped_entry_body_is_json_error() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;

    let response = app
        .server
        .post("/api/entries")
        .authorization_bearer(&ada.token)
        .json(&json!({"date": "2025-06-01", "title": 7, "content": "y"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["message"], "Please provide a valid request body!");
}

#[tokio::test]
async fn test_search_text_is_not_a_pattern() {
    let app = spawn_app().await;
    let ada = app.signup("Ada", "ada@example.com").await;
    app.create_entry(&ada, "2025-06-01", "Costs", "Paid $5 (cash)").await;

    let hits = app
        .server
        .get("/api/entries/search")
        .add_query_param("text", "$5 (")
        .authorization_bearer(&ada.token)
        .await;
    hits.assert_status_ok();
    assert_eq!(hits.json::<Value>()["data"].as_array().unwrap().len(), 1);

    let wildcard = app
        .server
        .get("/api/entries/search")
        .add_query_param("text", ".*")
        .authorization_bearer(&ada.token)
        .await;
    assert_eq!(wildcard.json::<Value>()["message"], "No entries found!");
}
