//! PostgreSQL backend for the catalog service.
//!
//! Provides pool construction from discrete `DB_*` environment variables,
//! idempotent schema setup with seed data, and [`store::PgEntryStore`].

pub mod config;
pub mod store;

use sqlx::postgres::PgPoolOptions;

use crate::config::DbConfig;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from database configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(config.connect_options())
        .await
}

/// Verify that the database answers queries.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
