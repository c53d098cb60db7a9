//! SQLite access layer for the gigpay platform.
//!
//! Exposes pool construction, a health check, migration running, and one
//! repository per table family. The pool is opened once at process start
//! and handed to components explicitly; there is no global handle.

pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

/// Convenience alias used across the workspace.
pub type DbPool = sqlx::SqlitePool;

/// Create the connection pool.
///
/// WAL mode is enabled for basic crash consistency, and foreign keys are
/// enforced (SQLite leaves them off by default). The database file is
/// created if missing.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations, tracked by version in `_sqlx_migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
