use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;

/// Application state shared by every handler
///
/// Holds the pool, not a connection: each request checks out its own
/// connection through the `DbConn` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
