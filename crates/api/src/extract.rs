//! Custom Axum extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections are [`AppError::BadRequest`].
///
/// Axum's own `Json` answers malformed bodies with plain-text 400/415/422
/// responses. This wrapper keeps every body problem (missing content type,
/// bad syntax, missing or unknown field, wrong type) a 400 with the usual
/// JSON error shape.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
