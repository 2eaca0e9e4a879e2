//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use agendum_auth::AuthError;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The authenticated caller, extracted from the `Authorization` header.
///
/// Expects `Authorization: Bearer <token>` where the token is an HS256 JWT
/// issued by this server at login. Rejects with 401 when the header is
/// missing, the scheme is wrong, or the token fails verification.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts.headers.get(header::AUTHORIZATION).ok_or_else(|| {
                AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            let token = header_value
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.tokens.verify(token)?;

            // The subject claim is written by us at issue time, but the token
            // is caller-supplied input until the signature check passes, so
            // treat a bad subject as an auth failure rather than a 400.
            let user_id = Uuid::parse_str(&claims.sub).map_err(|e| ApiError::Unauthorized {
                message: format!("Token subject is not a valid UUID: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            log::debug!("Authenticated request for user {}", user_id);

            Ok(AuthUser(user_id))
        }
    }
}
