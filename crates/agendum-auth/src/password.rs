use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Bcrypt password hashing with a configurable cost factor.
///
/// Each hash carries its own random salt, so verification never needs
/// anything beyond the stored hash string.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a cleartext password for storage
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| AuthError::PasswordHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check a cleartext password against a stored hash (constant-time)
    #[track_caller]
    pub fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| AuthError::PasswordHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
