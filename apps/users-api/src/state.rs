//! Application state management.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned into the routers that need it; the client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, used for readiness checks and shutdown
    pub mongo_client: Client,
    /// MongoDB database holding the users collection
    pub db: Database,
}
