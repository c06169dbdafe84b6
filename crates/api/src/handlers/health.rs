use axum::extract::State;
use axum::Json;

use crate::response::HealthResponse;
use crate::state::AppState;

/// GET /health -- returns service and database health.
///
/// Always answers 200 so load balancers see the process is up; `status`
/// reports `degraded` when the database does not respond.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = roster_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.as_str(),
        db_healthy,
    })
}
