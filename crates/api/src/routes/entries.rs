//! Route definitions for the entry resource, mounted at `/api/entries`.

use axum::routing::get;
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Entry routes.
///
/// ```text
/// GET    /        -> list_entries (?search=)
/// POST   /        -> create_entry
/// DELETE /        -> delete_all_entries
/// GET    /{id}    -> get_entry
/// PUT    /{id}    -> update_entry
/// DELETE /{id}    -> delete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(entries::list_entries)
                .post(entries::create_entry)
                .delete(entries::delete_all_entries),
        )
        .route(
            "/{id}",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        )
}
