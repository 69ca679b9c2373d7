//! Reusable OpenAPI response types for error envelopes.

use crate::envelope::Envelope;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed payload or failed validation",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "message": "error",
        "data": { "data": "location: must not be empty; name: must not be empty" }
    })
)]
pub struct BadRequestResponse(pub Envelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "message": "error",
        "data": { "data": "User with specified ID not found!" }
    })
)]
pub struct NotFoundResponse(pub Envelope);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - store failure or deadline exceeded",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "message": "error",
        "data": { "data": "store operation exceeded its deadline of 10s" }
    })
)]
pub struct InternalServerErrorResponse(pub Envelope);
