//! Single string path parameter extractor reporting undecodable segments as error envelopes.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for an opaque `{id}` path parameter.
///
/// The id is passed through as received; whether it names anything is the
/// handler's concern. A segment that cannot be percent-decoded becomes
/// [`AppError::MalformedInput`].
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/user/{id}", get(get_user));
/// ```
pub struct IdPath(pub String);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::MalformedInput(e.body_text()))?;

        Ok(IdPath(id))
    }
}
