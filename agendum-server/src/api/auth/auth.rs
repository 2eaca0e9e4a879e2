//! Account and session REST API handlers
//!
//! Registration, login, and logout. Sessions are stateless bearer tokens,
//! so logout is an acknowledgment only; the token stays valid until its
//! expiry claim runs out.

use crate::{
    ApiError, ApiResult, AppState, AuthUser, LoginRequest, MessageResponse, RegisterRequest,
    TokenResponse,
};

use agendum_core::User;
use agendum_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /register
///
/// Create a new account from an email and password
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let email = req.email.ok_or_else(|| ApiError::Validation {
        message: "email is required".to_string(),
        field: Some("email".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let password = req.password.ok_or_else(|| ApiError::Validation {
        message: "password is required".to_string(),
        field: Some("password".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let users = UserRepository::new(state.pool.clone());

    // Friendly rejection for the common case; the UNIQUE constraint below
    // still closes the race between this check and the insert.
    if users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::DuplicateEmail {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = state.passwords.hash(&password)?;
    let user = User::new(email, password_hash, req.name);

    if let Err(e) = users.create(&user).await {
        if e.is_unique_violation() {
            return Err(ApiError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        return Err(e.into());
    }

    log::info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /login
///
/// Verify credentials and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let email = req.email.ok_or_else(|| ApiError::Validation {
        message: "email is required".to_string(),
        field: Some("email".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let password = req.password.ok_or_else(|| ApiError::Validation {
        message: "password is required".to_string(),
        field: Some("password".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let users = UserRepository::new(state.pool.clone());

    // Unknown email and wrong password are indistinguishable to the caller
    let user = users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !state.passwords.verify(&password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.tokens.issue(user.id)?;

    log::debug!("Issued token for user {}", user.id);

    Ok(Json(TokenResponse { token }))
}

/// POST /logout
///
/// Acknowledge the end of a session. Requires a valid token; nothing is
/// revoked server-side because there is no session store to revoke from.
pub async fn logout(AuthUser(user_id): AuthUser) -> ApiResult<Json<MessageResponse>> {
    log::debug!("User {} logged out", user_id);

    Ok(Json(MessageResponse::new("Logged out successfully")))
}
