//! JSON body extractor reporting malformed payloads as error envelopes.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor that only parses; field constraints are checked by the caller.
///
/// Invalid JSON, wrong field types and a missing `Content-Type: application/json`
/// header all become [`AppError::MalformedInput`].
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_user(JsonBody(payload): JsonBody<UserPayload>) -> Envelope {
///     // validate, then persist
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedInput(e.body_text()))?;

        Ok(JsonBody(data))
    }
}
