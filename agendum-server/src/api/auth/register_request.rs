use serde::Deserialize;

/// Body for POST /register.
///
/// Required fields are still `Option` here so a missing one produces a
/// VALIDATION_ERROR naming the field instead of a deserialization reject.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Cleartext password, hashed before it is stored (required)
    #[serde(default)]
    pub password: Option<String>,

    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}
