use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Issues and verifies the HS256 bearer tokens handed out at login.
///
/// Constructed once at startup from configuration and shared through
/// application state; there is no ambient secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service with an HS256 symmetric secret and token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Sign a fresh token for the given identity
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify token signature and claims, in that order, and return the claims
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
