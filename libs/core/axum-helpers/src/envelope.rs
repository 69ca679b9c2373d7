//! Uniform success/error response wrapper.
//!
//! Every endpoint answers with the same three-field shape:
//!
//! ```json
//! { "status": 201, "message": "success", "data": { "data": { ... } } }
//! { "status": 404, "message": "error",   "data": { "data": "User with specified ID not found!" } }
//! ```
//!
//! The HTTP status of the response always equals `status`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Key under which every envelope stores its payload inside `data`.
pub const PAYLOAD_KEY: &str = "data";

/// The `message` field of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

/// Immutable response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    status: u16,
    message: Outcome,
    #[schema(value_type = Object)]
    data: Map<String, Value>,
}

impl Envelope {
    /// Build an envelope from its parts exactly as given.
    ///
    /// Consistency between `status` and `message` is the caller's concern.
    pub fn new(status: StatusCode, message: Outcome, data: Map<String, Value>) -> Self {
        Self {
            status: status.as_u16(),
            message,
            data,
        }
    }

    /// Success envelope carrying `payload` under [`PAYLOAD_KEY`].
    ///
    /// A payload that cannot be encoded yields a 500 error envelope instead.
    pub fn success<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => Self::new(status, Outcome::Success, single(value)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode response payload");
                Self::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to encode response payload",
                )
            }
        }
    }

    /// Error envelope carrying a human-readable description under [`PAYLOAD_KEY`].
    pub fn error(status: StatusCode, description: impl Into<String>) -> Self {
        Self::new(status, Outcome::Error, single(Value::String(description.into())))
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn message(&self) -> Outcome {
        self.message
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// The value stored under [`PAYLOAD_KEY`], if any.
    pub fn payload(&self) -> Option<&Value> {
        self.data.get(PAYLOAD_KEY)
    }

    pub fn is_success(&self) -> bool {
        self.message == Outcome::Success
    }
}

fn single(value: Value) -> Map<String, Value> {
    let mut data = Map::with_capacity(1);
    data.insert(PAYLOAD_KEY.to_string(), value);
    data
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
