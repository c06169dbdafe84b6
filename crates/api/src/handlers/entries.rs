//! Handlers for the entry resource.
//!
//! Each handler validates its input before touching storage and maps absence
//! to a 404 via [`AppError::entry_not_found`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_db::models::entry::{CreateEntry, UpdateEntry};
use roster_db::repositories::EntryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::query::SearchParams;
use crate::response::{DeletedAllResponse, DeletedResponse};
use crate::state::AppState;

/// GET /api/entries?search=
///
/// List entries newest first, optionally filtered by a substring of
/// name, email or role.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let entries = EntryRepo::list(&state.pool, params.search.as_deref()).await?;

    Ok(Json(entries))
}

/// GET /api/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::find_by_id(&state.pool, &entry_id)
        .await?
        .ok_or_else(|| AppError::entry_not_found(&entry_id))?;

    Ok(Json(entry))
}

/// POST /api/entries
///
/// Create an entry with a client-supplied ID. `createdAt` is taken verbatim
/// when present.
pub async fn create_entry(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateEntry>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let entry = EntryRepo::create(&state.pool, &input).await?;

    tracing::info!(entry_id = %entry.id, "Entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/entries/{id}
///
/// Replace name, email and role. All three are required.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
    ValidJson(input): ValidJson<UpdateEntry>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let entry = EntryRepo::update(&state.pool, &entry_id, &input)
        .await?
        .ok_or_else(|| AppError::entry_not_found(&entry_id))?;

    tracing::info!(entry_id = %entry.id, "Entry updated");

    Ok(Json(entry))
}

/// DELETE /api/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = EntryRepo::delete(&state.pool, &entry_id).await?;

    if !deleted {
        return Err(AppError::entry_not_found(entry_id));
    }

    tracing::info!(entry_id = %entry_id, "Entry deleted");

    Ok(Json(DeletedResponse {
        message: "Entry deleted",
        id: entry_id,
    }))
}

/// DELETE /api/entries
pub async fn delete_all_entries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = EntryRepo::delete_all(&state.pool).await?;

    tracing::info!(count, "All entries deleted");

    Ok(Json(DeletedAllResponse {
        message: "All entries deleted",
        count,
    }))
}
