//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for listing entries (`?search=`).
///
/// Blank values mean "no filter"; normalization happens in the repository.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
