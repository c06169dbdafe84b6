use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` (or per test) and cloned into each request; the
/// handlers hold nothing between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roster_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
