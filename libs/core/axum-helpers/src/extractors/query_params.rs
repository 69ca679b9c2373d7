//! Query-string extractor reporting unparseable parameters as error envelopes.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Query extractor whose rejection is [`AppError::MalformedInput`].
///
/// Use `Option` fields to tell "absent" from "present"; range checks belong
/// to the caller so every violation can be reported together.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::MalformedInput(e.body_text()))?;

        Ok(QueryParams(params))
    }
}
