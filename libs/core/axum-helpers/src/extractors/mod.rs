//! Custom extractors for Axum handlers.
//!
//! These extractors reject unparseable input with an error envelope
//! (400, `message: "error"`) instead of axum's plain-text rejection.

pub mod id_path;
pub mod json_body;
pub mod query_params;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use query_params::QueryParams;
