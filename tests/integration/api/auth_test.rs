//! Authentication API integration tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{spawn_app, PASSWORD};

#[tokio::test]
async fn test_signup_returns_token_and_cookie() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/auth/signup")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": PASSWORD,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));

    let body: Value = response.json();
    assert_eq!(body["message"], "User registered successfully!");
    assert!(body["data"]["token"].is_string());
    assert_eq!(body["data"]["user"]["firstName"], "Ada");
    assert_eq!(body["data"]["user"]["currentStreak"], 0);
    assert!(body["data"]["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_signup_rejections() {
    let app = spawn_app().await;
    app.signup("Ada", "ada@example.com").await;

    let cases = [
        (json!({"firstName": "A", "email": "a@b.c", "password": PASSWORD}), StatusCode::UNPROCESSABLE_ENTITY),
        (
            json!({"firstName": "A", "lastName": "B", "email": "nope", "password": PASSWORD}),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            json!({"firstName": "A", "lastName": "B", "email": "a@b.c", "password": "short"}),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            json!({"firstName": "A", "lastName": "B", "email": "ADA@example.com", "password": PASSWORD}),
            StatusCode::CONFLICT,
        ),
    ];

    for (body, status) in cases {
        let response = app.server.post("/api/auth/signup").json(&body).await;
        response.assert_status(status);
    }
}

#[tokio::test]
async fn test_login_and_me() {
    let app = spawn_app().await;
    let user = app.signup("Ada", "ada@example.com").await;

    let wrong = app
        .server
        .post("/api/auth/login")
        .json(&json!({"email": "ada@example.com", "password": "wrong password"}))
        .await;
    wrong.assert_status(StatusCode::UNAUTHORIZED);
    let unknown = app
        .server
        .post("/api/auth/login")
        .json(&json!({"email": "who@example.com", "password": PASSWORD}))
        .await;
    unknown.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.json::<Value>(), unknown.json::<Value>());

    let login = app
        .server
        .post("/api/auth/login")
        .json(&json!({"email": "Ada@Example.com", "password": PASSWORD}))
        .await;
    login.assert_status_ok();
    let token = login.json::<Value>()["data"]["token"].as_str().unwrap().to_string();

    let me = app.server.get("/api/auth/me").authorization_bearer(&token).await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["data"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let app = spawn_app().await;
    let user = app.signup("Ada", "ada@example.com").await;

    let me = app
        .server
        .get("/api/auth/me")
        .add_header(header::COOKIE, format!("token={}", user.token).parse::<header::HeaderValue>().unwrap())
        .await;
    me.assert_status_ok();
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = spawn_app().await;

    for path in ["/api/auth/me", "/api/entries", "/api/collaboration/shared-with-me"] {
        let response = app.server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>()["message"],
            "Unauthorized! Please login to continue."
        );
    }

    let forged = app
        .server
        .get("/api/entries")
        .authorization_bearer("not-a-token")
        .await;
    forged.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = spawn_app().await;

    let response = app.server.post("/api/auth/logout").await;
    response.assert_status_ok();
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_malformed_json_body_gets_json_error() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/auth/signup")
        .text(r#"{"email": "#)
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Please provide a valid request body!"})
    );
}
