use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::time::Duration;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("User with specified ID not found!")]
    NotFound(String),

    #[error("store operation exceeded its deadline of {0:?}")]
    Timeout(Duration),

    #[error("store error: {0}")]
    Store(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Timeout(budget) => UserError::Timeout(budget),
            StoreError::Backend(msg) => UserError::Store(msg),
        }
    }
}

/// Convert UserError to AppError for the envelope response
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let description = err.to_string();
        match err {
            UserError::Validation(_) => AppError::ValidationFailed(description),
            UserError::NotFound(id) => {
                tracing::debug!(user_id = %id, "User not found");
                AppError::NotFound(description)
            }
            UserError::Timeout(_) => AppError::Timeout(description),
            UserError::Store(_) => AppError::InternalServerError(description),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
