use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when the underlying failure is a UNIQUE constraint violation.
    /// Lets callers map a duplicate insert to a domain error instead of a
    /// generic storage failure.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Sqlx {
                source: sqlx::Error::Database(db_err),
                ..
            } => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
