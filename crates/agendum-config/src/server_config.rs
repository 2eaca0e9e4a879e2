use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 asks the OS for a free port; anything else must be
        // outside the privileged range.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::invalid(
                "server",
                format!("port must be 0 (auto) or >= {}, got {}", MIN_PORT, self.port),
            ));
        }

        Ok(())
    }
}
