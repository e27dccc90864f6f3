use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database '{url}': {source} (check if data directory is writable)")]
    Connection { url: String, source: sqlx::Error },
    #[error("Failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Open the SQLite pool and create the schema if it is missing
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, DatabaseError> {
    let connection_error = |e: sqlx::Error| DatabaseError::Connection {
        url: database_url.to_string(),
        source: e,
    };

    // WAL allows concurrent reads during writes; busy_timeout waits for the
    // lock instead of failing immediately. Both are applied per connection.
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(connection_error)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(connection_error)?;

    sqlx::migrate!("../../migrations").run(&pool).await?;

    tracing::debug!("Database ready at {}", database_url);

    Ok(pool)
}
