//! Entry model and DTOs.
//!
//! Columns are snake_case in the database; the JSON shape is camelCase.

use roster_core::entry::{validate_fields, validate_id};
use roster_core::error::CoreError;
use roster_core::types::{EntryId, EpochMillis};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `entries` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: EpochMillis,
    /// `None` until the first update.
    pub updated_at: Option<EpochMillis>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new entry.
///
/// `createdAt` is optional; when absent the repository stamps the current time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEntry {
    pub id: EntryId,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<EpochMillis>,
}

impl CreateEntry {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_id(&self.id)?;
        validate_fields(&self.name, &self.email, &self.role)
    }
}

/// DTO for updating an entry. All three mutable fields are replaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEntry {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UpdateEntry {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_fields(&self.name, &self.email, &self.role)
    }
}
