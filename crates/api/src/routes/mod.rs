pub mod entries;
pub mod health;
pub mod static_files;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /entries                  list (?search=), create, delete all
/// /entries/{id}             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/entries", entries::router())
}
