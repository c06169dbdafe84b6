//! Response bodies for endpoints that do not return an entry.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Deployment profile (`development`, `production`, `testing`).
    pub environment: &'static str,
    /// Whether the database answered a ping.
    pub db_healthy: bool,
}

/// Body of `DELETE /api/entries/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub id: String,
}

/// Body of `DELETE /api/entries`.
#[derive(Debug, Serialize)]
pub struct DeletedAllResponse {
    pub message: &'static str,
    pub count: u64,
}
