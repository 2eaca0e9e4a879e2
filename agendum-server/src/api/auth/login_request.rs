use serde::Deserialize;

/// Body for POST /login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Cleartext password (required)
    #[serde(default)]
    pub password: Option<String>,
}
