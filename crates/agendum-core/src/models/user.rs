use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered account. The password is only ever held as a bcrypt hash,
/// so this type stays out of serde entirely.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, password_hash: String, name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            created_at: Utc::now(),
        }
    }
}
