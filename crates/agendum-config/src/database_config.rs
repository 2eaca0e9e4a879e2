use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file path, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // The file must stay inside the config directory
        let path = std::path::Path::new(&self.path);
        if path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::invalid(
                "database",
                "path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
