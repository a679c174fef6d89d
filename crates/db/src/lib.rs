//! PostgreSQL persistence for lineup.
//!
//! Implements the `lineup-core` repository traits against sqlx. Row structs
//! live in [`models`], the trait adapters in [`repositories`].

use lineup_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub mod models;
pub mod repositories;

/// Alias so downstream crates do not need a direct sqlx dependency.
pub type DbPool = PgPool;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Map a sqlx failure into the domain error taxonomy.
pub(crate) fn storage_err(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "storage operation failed");
    CoreError::Internal(format!("storage error: {err}"))
}
