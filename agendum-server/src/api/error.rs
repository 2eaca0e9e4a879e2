//! REST API error surface
//!
//! Every failure leaving a handler serializes to the same JSON envelope:
//! `{"error": {"code", "message", "field"?}}` with a matching HTTP status.

use agendum_auth::AuthError;
use agendum_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Outer wrapper so the body is always `{"error": {...}}`
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable code, e.g. "NOT_FOUND"
    pub code: String,
    /// Human-readable description
    pub message: String,
    /// Set when a single named field caused a validation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Registration with an email that is already taken (400)
    #[error("Duplicate email: registration rejected {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Login with an unknown email or a wrong password (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Missing, malformed, or expired bearer token (401)
    ///
    /// The message is for the server log only; clients always get the
    /// same generic body regardless of why the token was rejected.
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. }
            | ApiError::DuplicateEmail { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials { .. } | ApiError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ApiErrorBody {
        let (code, message, field) = match self {
            ApiError::NotFound { message, .. } => ("NOT_FOUND", message, None),
            ApiError::Validation { message, field, .. } => ("VALIDATION_ERROR", message, field),
            ApiError::DuplicateEmail { .. } => (
                "DUPLICATE_EMAIL",
                "User already exists".to_string(),
                Some("email".to_string()),
            ),
            ApiError::InvalidCredentials { .. } => {
                ("INVALID_CREDENTIALS", "Invalid credentials".to_string(), None)
            }
            ApiError::Unauthorized { .. } => {
                ("UNAUTHORIZED", "Authentication required".to_string(), None)
            }
            ApiError::Internal { message, .. } => ("INTERNAL_ERROR", message, None),
            ApiError::BadRequest { message, .. } => ("BAD_REQUEST", message, None),
        };

        ApiErrorBody {
            code: code.to_string(),
            message,
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // One log line per failed request, with the origin location
        log::error!("{}", self);

        let status = self.status_code();
        let body = self.into_body();

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// A malformed UUID in a request path is the caller's mistake, not ours
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Database failures reach clients as a generic 500; the cause stays in
/// the server log
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Initialization { message, .. } => ApiError::Internal {
                message: format!("Database initialization error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Anything that went wrong while checking credentials or tokens collapses
/// to Unauthorized; failures inside bcrypt or the JWT encoder are server
/// faults and surface as Internal instead.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::PasswordHash { .. } | AuthError::JwtEncode { .. } => {
                log::error!("Auth service error: {}", e);
                ApiError::Internal {
                    message: "Authentication service failure".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => ApiError::Unauthorized {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
