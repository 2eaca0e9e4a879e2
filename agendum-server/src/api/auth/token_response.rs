use serde::Serialize;

/// Successful login response carrying the bearer token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
