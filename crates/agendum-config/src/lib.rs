mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "agendum.db";
const DEFAULT_TOKEN_TTL_SECS: u64 = 900;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 86_400;
const DEFAULT_BCRYPT_COST: u32 = 12;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const MIN_JWT_SECRET_BYTES: usize = 32;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
