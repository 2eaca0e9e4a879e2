use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Working directory is unavailable: {source}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Validation failure in the named config section.
    #[track_caller]
    pub fn invalid<S: Into<String>>(section: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
