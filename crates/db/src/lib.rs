use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;

pub mod repositories;
pub mod rows;

pub type DbPool = sqlx::MySqlPool;

/// Default upper bound on concurrently open connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a bounded connection pool from a database URL.
///
/// Callers wait for a free connection when the pool is exhausted; the long
/// acquire timeout keeps that wait effectively unbounded.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(300))
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
