//! Entry field rules and search helpers.
//!
//! Lives in `core` so the repository layer and the HTTP layer agree on what a
//! well-formed entry is and how a search string becomes a `LIKE` pattern.

use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const ENTITY_NAME: &str = "Entry";

/// Maximum length of an entry id (matches the `entries.id` column width).
pub const MAX_ID_LEN: usize = 50;

/// Maximum length of `name`, `email` and `role`.
pub const MAX_FIELD_LEN: usize = 100;

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate that a required text field is present and within `max_len` characters.
///
/// Presence means non-empty after trimming; no format checks are applied.
pub fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate a client-supplied entry id.
pub fn validate_id(id: &str) -> Result<(), CoreError> {
    validate_required("id", id, MAX_ID_LEN)
}

/// Validate the three mutable fields shared by create and update.
pub fn validate_fields(name: &str, email: &str, role: &str) -> Result<(), CoreError> {
    validate_required("name", name, MAX_FIELD_LEN)?;
    validate_required("email", email, MAX_FIELD_LEN)?;
    validate_required("role", role, MAX_FIELD_LEN)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Normalize a raw `?search=` value.
///
/// Returns `None` when there is nothing to filter on (absent, empty or
/// whitespace-only input).
pub fn normalize_search(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Case-fold a stored field or a search term.
///
/// Stored values and search terms both go through this function. SQLite's
/// `LOWER` only folds ASCII, so folding never happens in SQL.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Build a case-folded `%term%` pattern that matches `term` literally.
///
/// `%`, `_` and the escape character itself are escaped with [`LIKE_ESCAPE`],
/// so the caller must pair the pattern with `ESCAPE '\'`.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in fold_case(term).chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
