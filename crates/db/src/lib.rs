//! Persistence layer: pool construction, migrations, models and repositories.
//!
//! The pool is a [`sqlx::AnyPool`] so the same repositories run against
//! PostgreSQL in production and SQLite for local development and tests. All
//! SQL in this crate is written to the common subset of both dialects.

use std::time::Duration;

use sqlx::any::AnyPoolOptions;
use sqlx::migrate::{MigrateError, Migrator};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::AnyPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool tuning. Affects resource usage only, never query behaviour.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Connections older than this are closed and replaced.
    pub recycle_after: Option<Duration>,
    /// Ping a connection before handing it out.
    pub test_before_acquire: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 15,
            recycle_after: Some(Duration::from_secs(300)),
            test_before_acquire: true,
        }
    }
}

/// Whether `database_url` points at a private in-memory SQLite database.
///
/// Each connection to such a URL sees its own empty database, so the pool
/// must hold exactly one connection and never let it expire.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite::memory:") || database_url.contains("mode=memory")
}

/// Create a connection pool from a database URL (`postgres://` or `sqlite:`).
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let options = if is_in_memory(database_url) {
        AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .max_lifetime(config.recycle_after)
    };

    let pool = options
        .test_before_acquire(config.test_before_acquire)
        .connect(database_url)
        .await?;

    let backend = database_url.split(':').next().unwrap_or_default();
    tracing::debug!(backend, "Database pool connected");
    Ok(pool)
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
