use crate::ApiError;

use agendum_auth::{AuthError, PasswordHasher};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Task abc not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Task abc not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "title is required".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_it() {
    let error = ApiError::Validation {
        message: "Invalid UUID format".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_duplicate_email_returns_400_with_fixed_body() {
    let error = ApiError::DuplicateEmail {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
    assert_eq!(json["error"]["message"], "User already exists");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_invalid_credentials_returns_401() {
    let error = ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_unauthorized_body_never_carries_the_cause() {
    let error = ApiError::Unauthorized {
        message: "JWT decode failed: InvalidSignature".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Authentication required");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_parse_error_maps_to_validation() {
    let parse_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let error = ApiError::from(parse_err);

    assert!(matches!(error, ApiError::Validation { field: None, .. }));
}

#[test]
fn test_expired_token_maps_to_unauthorized() {
    let auth_err = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let error = ApiError::from(auth_err);

    assert!(matches!(error, ApiError::Unauthorized { .. }));
}

#[test]
fn test_bcrypt_failure_maps_to_internal() {
    // A malformed stored hash makes bcrypt verification fail outright
    let auth_err = PasswordHasher::new(4)
        .verify("password", "not-a-bcrypt-hash")
        .unwrap_err();
    let error = ApiError::from(auth_err);

    assert!(matches!(error, ApiError::Internal { .. }));
}
