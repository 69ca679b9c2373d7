//! Users API routes

use axum::Router;
use domain_users::{MongoUserStore, UserService, handlers};

use crate::state::AppState;

/// Create users router
pub fn router(state: &AppState) -> Router {
    let users = &state.config.users;

    let store = MongoUserStore::with_collection(state.db.clone(), &users.collection);
    let service = UserService::with_deadline(store, users.store_deadline);

    handlers::router(service)
}
