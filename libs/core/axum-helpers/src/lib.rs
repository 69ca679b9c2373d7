//! # Axum Helpers
//!
//! Shared building blocks for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the `{status, message, data}` response wrapper
//! - **[`errors`]**: [`AppError`] and its mapping onto error envelopes
//! - **[`extractors`]**: Path id, JSON body and query extractors with envelope rejections
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{Envelope, Outcome, PAYLOAD_KEY};

pub use errors::AppError;
pub use errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse};

pub use extractors::{IdPath, JsonBody, QueryParams};

pub use http::security_headers;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
