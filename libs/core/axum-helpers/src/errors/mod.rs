pub mod handlers;
pub mod responses;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::Envelope;

/// Application error type rendered as an error [`Envelope`].
///
/// Domain errors convert into this type; the variant decides the HTTP status
/// and the log level, the message becomes the envelope's description.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedInput(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Human-readable description placed in the envelope.
    pub fn description(&self) -> String {
        match self {
            AppError::MalformedInput(msg)
            | AppError::ValidationFailed(msg)
            | AppError::NotFound(msg)
            | AppError::Timeout(msg)
            | AppError::InternalServerError(msg)
            | AppError::ServiceUnavailable(msg) => msg.clone(),
        }
    }
}

impl From<AppError> for Envelope {
    fn from(err: AppError) -> Self {
        let status = err.status();

        match &err {
            AppError::MalformedInput(_) => tracing::warn!(%status, "{}", err),
            AppError::ValidationFailed(_) | AppError::NotFound(_) => {
                tracing::info!(%status, "{}", err)
            }
            AppError::ServiceUnavailable(_) => tracing::warn!(%status, "{}", err),
            AppError::Timeout(_) | AppError::InternalServerError(_) => {
                tracing::error!(%status, "{}", err)
            }
        }

        Envelope::error(status, err.description())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Envelope::from(self).into_response()
    }
}
