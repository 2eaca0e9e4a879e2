use agendum_auth::{PasswordHasher, TokenService};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to every handler.
///
/// Everything here is constructed once at startup and read-only afterwards;
/// clones are cheap (the pool and the Arcs are reference-counted).
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub passwords: Arc<PasswordHasher>,
}
