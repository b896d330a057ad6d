//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use serde_json::{json, Value};

use noticeboard::config::{BoardStorage, Config};
use noticeboard::web::{create_router, AppState};
use noticeboard::Database;

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// Create a test configuration.
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.auth.jwt_secret = TEST_SECRET.to_string();
    config
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> TestServer {
    create_test_server_with(create_test_config()).await
}

/// Create a test server over an in-memory database with the given configuration.
pub async fn create_test_server_with(config: Config) -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let router = create_router(AppState::from_config(&config, &db), &config);
    TestServer::new(router).expect("Failed to create test server")
}

/// Test server with write protection switched off.
pub async fn create_open_server(storage: BoardStorage) -> TestServer {
    let mut config = create_test_config();
    config.auth.protect_writes = false;
    config.boards.storage = storage;
    create_test_server_with(config).await
}

/// Register a user and log in, returning the access token.
pub async fn register_and_login(server: &TestServer, email: &str, password: &str) -> String {
    server
        .post("/auth/register")
        .json(&json!({
            "email": email,
            "password": password,
            "name": "Tester"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    response.json::<Value>()["accessToken"]
        .as_str()
        .expect("login response without accessToken")
        .to_string()
}

/// Build an `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Create a board with the given token and return its JSON.
pub async fn create_board(server: &TestServer, token: &str, title: &str, description: &str) -> Value {
    let response = server
        .post("/boards")
        .add_header(AUTHORIZATION, bearer(token))
        .json(&json!({ "title": title, "description": description }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
