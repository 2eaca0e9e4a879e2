use agendum_server::{AppState, build_router, logger};

use agendum_auth::{PasswordHasher, TokenService};
use agendum_config::Config;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use rand::RngCore;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up a .env file if one exists (development convenience)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    config.validate()?;

    logger::initialize(config.logging.level, log_file_path(&config)?, config.logging.colored)?;

    info!("Starting agendum-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = open_pool(&config).await?;

    info!("Running database migrations...");
    sqlx::migrate!("../crates/agendum-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    let state = AppState {
        pool,
        tokens: Arc::new(token_service(&config)),
        passwords: Arc::new(PasswordHasher::new(config.auth.bcrypt_cost)),
    };

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // local_addr, not config: with port 0 the OS picked the real one
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolve the log file location under `<config dir>/<logging.dir>/`,
/// creating the directory. None means stdout logging.
fn log_file_path(config: &Config) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let log_dir = Config::config_dir()?.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir)?;

    Ok(Some(log_dir.join(filename)))
}

/// Open the SQLite pool in WAL mode, creating the file on first run.
async fn open_pool(config: &Config) -> Result<SqlitePool, Box<dyn Error>> {
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    Ok(pool)
}

/// Token signer: secret pinned via configuration, or generated fresh at
/// startup. An ephemeral secret means every outstanding token dies with
/// the process.
fn token_service(config: &Config) -> TokenService {
    let ttl = Duration::from_secs(config.auth.token_ttl_secs);

    match config.auth.jwt_secret {
        Some(ref secret) => TokenService::new(secret.as_bytes(), ttl),
        None => {
            let mut secret = [0u8; 32];
            rand::rng().fill_bytes(&mut secret);
            info!("No JWT secret configured; using an ephemeral secret for this process");
            TokenService::new(&secret, ttl)
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
