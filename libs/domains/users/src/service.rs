//! User Service - validation, deadlines and not-found policy

use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{SearchQuery, User, UserDocument, UserPayload};
use crate::store::{StoreDeadline, UserStore};
use crate::validation::validate;

/// Budget for all store calls made by a single operation.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// User service providing the public user operations
///
/// Each operation validates its input before touching the store and runs every
/// store call under one [`StoreDeadline`] started when the operation begins.
pub struct UserService<S: UserStore> {
    store: Arc<S>,
    deadline: Duration,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self::with_deadline(store, DEFAULT_DEADLINE)
    }

    pub fn with_deadline(store: S, deadline: Duration) -> Self {
        Self {
            store: Arc::new(store),
            deadline,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    #[instrument(skip(self, payload))]
    pub async fn create_user(&self, payload: UserPayload) -> UserResult<User> {
        validate(&payload)?;

        let deadline = StoreDeadline::start(self.deadline);
        let document = UserDocument::new(payload);
        deadline.run(self.store.insert(&document)).await?;

        tracing::info!(user_id = %document.id, "User created");
        Ok(document.into())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        let deadline = StoreDeadline::start(self.deadline);
        deadline
            .run(self.store.find_by_id(id))
            .await?
            .map(User::from)
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Replace name, location and title, then return the stored result.
    #[instrument(skip(self, payload))]
    pub async fn update_user(&self, id: &str, payload: UserPayload) -> UserResult<User> {
        validate(&payload)?;

        let deadline = StoreDeadline::start(self.deadline);
        let matched = deadline.run(self.store.update_by_id(id, &payload)).await?;
        if matched == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        let updated = deadline
            .run(self.store.find_by_id(id))
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        tracing::info!(user_id = %id, "User updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        let deadline = StoreDeadline::start(self.deadline);
        let deleted = deadline.run(self.store.delete_by_id(id)).await?;
        if deleted == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        let deadline = StoreDeadline::start(self.deadline);
        let documents = deadline.run(self.store.find_all()).await?;
        Ok(documents.into_iter().map(User::from).collect())
    }

    /// One page of users; `offset` documents are skipped.
    #[instrument(skip(self))]
    pub async fn search_users(&self, query: SearchQuery) -> UserResult<Vec<User>> {
        validate(&query)?;

        let (Some(offset), Some(limit)) = (query.offset, query.limit) else {
            return Err(UserError::Validation(
                "offset and limit are required".to_string(),
            ));
        };
        let offset = u64::try_from(offset)
            .map_err(|_| UserError::Validation("offset: must be at least 1".to_string()))?;

        let deadline = StoreDeadline::start(self.deadline);
        let documents = deadline.run(self.store.find_page(offset, limit)).await?;
        Ok(documents.into_iter().map(User::from).collect())
    }
}

impl<S: UserStore> Clone for UserService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            deadline: self.deadline,
        }
    }
}
