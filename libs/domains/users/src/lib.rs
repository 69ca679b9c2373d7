//! Users Domain
//!
//! CRUD, listing and paginated search for users stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelope responses
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, per-operation deadline, not-found policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Documents, payloads, search query
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, MongoUserStore, UserService};
//! use mongodb::Client;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = MongoUserStore::new(client.database("golangAPI"));
//! let service = UserService::with_deadline(store, Duration::from_secs(10));
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, DELETED_MESSAGE};
pub use models::{SearchQuery, User, UserDocument, UserPayload};
pub use crate::mongodb::MongoUserStore;
pub use service::{DEFAULT_DEADLINE, UserService};
pub use store::{StoreDeadline, StoreError, StoreResult, UserStore};
