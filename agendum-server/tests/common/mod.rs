#![allow(dead_code)]

//! Test infrastructure for agendum-server API tests

use agendum_auth::{PasswordHasher, TokenService};
use agendum_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Signing secret shared by every test app instance
pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/agendum-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        tokens: Arc::new(TokenService::new(TEST_JWT_SECRET, Duration::from_secs(900))),
        // Minimum bcrypt cost keeps tests fast
        passwords: Arc::new(PasswordHasher::new(4)),
    }
}

/// Register an account and log it in, returning the bearer token
pub async fn register_and_login(app: &Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::json!({"email": email, "password": password}).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::json!({"email": email, "password": password}).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    json["token"]
        .as_str()
        .expect("login response must carry a token")
        .to_string()
}
