use crate::{AppState, AuthUser};

use agendum_auth::{PasswordHasher, TokenService};

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request, response::IntoResponse};
use http::StatusCode;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

const SECRET: &[u8] = b"extractor-test-secret-0123456789abcdef";

async fn create_test_state() -> AppState {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/agendum-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        tokens: Arc::new(TokenService::new(SECRET, Duration::from_secs(900))),
        passwords: Arc::new(PasswordHasher::new(4)),
    }
}

#[tokio::test]
async fn test_extractor_accepts_valid_bearer_token() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let token = state.tokens.issue(user_id).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn test_extractor_rejects_missing_header_with_401() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    let rejection = result.err().expect("missing header must be rejected");
    let response = rejection.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_rejects_non_bearer_scheme() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let token = state.tokens.issue(user_id).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Token {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_extractor_rejects_garbage_token() {
    let state = create_test_state().await;

    let request = Request::builder()
        .header("Authorization", "Bearer not.a.jwt")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    let rejection = result.err().expect("garbage token must be rejected");
    let response = rejection.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let state = create_test_state().await;
    let other = TokenService::new(b"some-other-secret-material-here!", Duration::from_secs(900));
    let token = other.issue(Uuid::new_v4()).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}
