use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_TTL_SECS, MAX_BCRYPT_COST,
    MAX_TOKEN_TTL_SECS, MIN_BCRYPT_COST, MIN_JWT_SECRET_BYTES, MIN_TOKEN_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. When unset the server generates an ephemeral
    /// one at startup and issued tokens do not survive a restart.
    pub jwt_secret: Option<String>,
    /// Bearer token lifetime in seconds
    pub token_ttl_secs: u64,
    /// Bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_BYTES
        {
            return Err(ConfigError::invalid(
                "auth",
                format!(
                    "jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                ),
            ));
        }

        if self.token_ttl_secs < MIN_TOKEN_TTL_SECS || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::invalid(
                "auth",
                format!(
                    "token_ttl_secs must be {}-{}, got {}",
                    MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
                ),
            ));
        }

        if self.bcrypt_cost < MIN_BCRYPT_COST || self.bcrypt_cost > MAX_BCRYPT_COST {
            return Err(ConfigError::invalid(
                "auth",
                format!(
                    "bcrypt_cost must be {}-{}, got {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
                ),
            ));
        }

        Ok(())
    }
}
