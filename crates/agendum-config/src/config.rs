use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration for this process.
    ///
    /// Sources, in order:
    /// 1. `<config dir>/config.toml` when present, otherwise built-in defaults
    /// 2. `AGENDUM_*` environment variables, which override file values
    ///
    /// The config directory comes from `AGENDUM_CONFIG_DIR` (default
    /// `./.agendum/`) and is created when missing. Validation is separate -
    /// call validate() on the result.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::parse_file(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn parse_file(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Config directory: `AGENDUM_CONFIG_DIR` if set, else `./.agendum/`.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("AGENDUM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd =
            std::env::current_dir().map_err(|e| ConfigError::WorkingDir { source: e })?;
        Ok(cwd.join(".agendum"))
    }

    /// Validate every section. Run once at startup so a bad value stops the
    /// process before it binds a socket.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Absolute path to the database file, resolved under the config dir.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        info!(
            "  auth: HS256 ({} secret), ttl={}s, bcrypt cost={}",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "ephemeral"
            },
            self.auth.token_ttl_secs,
            self.auth.bcrypt_cost
        );

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        env_parse("AGENDUM_SERVER_HOST", &mut self.server.host);
        env_parse("AGENDUM_SERVER_PORT", &mut self.server.port);

        env_parse("AGENDUM_DATABASE_PATH", &mut self.database.path);

        env_set("AGENDUM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        env_parse("AGENDUM_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        env_parse("AGENDUM_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);

        env_parse("AGENDUM_LOG_LEVEL", &mut self.logging.level);
        env_parse("AGENDUM_LOG_COLORED", &mut self.logging.colored);
        env_set("AGENDUM_LOG_FILE", &mut self.logging.file);
    }
}

/// Replace `target` when the variable is set and its value parses.
/// A set-but-unparseable value is ignored, keeping the configured one.
fn env_parse<T: std::str::FromStr>(name: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(name)
        && let Ok(value) = raw.parse()
    {
        *target = value;
    }
}

/// Replace an optional string setting when the variable is set.
fn env_set(name: &str, target: &mut Option<String>) {
    if let Ok(raw) = std::env::var(name) {
        *target = Some(raw);
    }
}
