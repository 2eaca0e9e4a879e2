use error_location::ErrorLocation;
use thiserror::Error;

/// Failures from password hashing and bearer token handling.
///
/// Every variant records where it was raised; the server decides which of
/// these reach a client and which stay in the log.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header missing {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Authorization scheme is not Bearer {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Bearer token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Could not sign token: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token rejected: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    PasswordHash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
