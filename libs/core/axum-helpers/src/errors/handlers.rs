use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::envelope::Envelope;

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    Envelope::error(StatusCode::NOT_FOUND, "The requested resource was not found").into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    Envelope::error(
        StatusCode::METHOD_NOT_ALLOWED,
        "The HTTP method is not allowed for this resource",
    )
    .into_response()
}
