//! Common test utilities and helpers
//!
//! Every test gets its own in-memory SQLite database and an `axum-test`
//! server wrapping the full application router.

#![allow(dead_code)]

use axum_test::TestServer;
use daybook::backend::server::{create_app, AppState, ServerConfig};
use serde_json::{json, Value};
use uuid::Uuid;

pub const PASSWORD: &str = "correct horse";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

pub async fn spawn_app() -> TestApp {
    let config = ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret("integration-test-secret")
        .bcrypt_cost(4)
        .build()
        .expect("test config");
    let state = AppState::connect(config).await.expect("in-memory database");
    let server = TestServer::new(create_app(state.clone())).expect("test server");
    TestApp { server, state }
}

impl TestApp {
    /// Register a user through the API and keep its token
    pub async fn signup(&self, first_name: &str, email: &str) -> TestUser {
        let response = self
            .server
            .post("/api/auth/signup")
            .json(&json!({
                "firstName": first_name,
                "lastName": "Tester",
                "email": email,
                "password": PASSWORD,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        TestUser {
            id: body["data"]["user"]["id"].as_str().unwrap().parse().unwrap(),
            email: email.to_string(),
            token: body["data"]["token"].as_str().unwrap().to_string(),
        }
    }

    /// Create an entry as `user` and return its JSON
    pub async fn create_entry(&self, user: &TestUser, date: &str, title: &str, content: &str) -> Value {
        let response = self
            .server
            .post("/api/entries")
            .authorization_bearer(&user.token)
            .json(&json!({"date": date, "title": title, "content": content}))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["data"].clone()
    }
}

/// Pull the `id` of an entry or comment out of its JSON
pub fn id_of(value: &Value) -> Uuid {
    value["id"].as_str().unwrap().parse().unwrap()
}
