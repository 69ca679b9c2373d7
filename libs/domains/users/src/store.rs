use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

use crate::models::{UserDocument, UserPayload};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store operation exceeded its deadline of {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Persistence interface for users.
///
/// Identifiers are passed as received from the client. An identifier that is
/// not a valid ObjectId matches nothing: `find_by_id` yields `None` and the
/// write operations report a count of 0.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: &UserDocument) -> StoreResult<()>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserDocument>>;

    /// Set name, location and title. Returns the matched count.
    async fn update_by_id(&self, id: &str, fields: &UserPayload) -> StoreResult<u64>;

    /// Returns the deleted count.
    async fn delete_by_id(&self, id: &str) -> StoreResult<u64>;

    async fn find_all(&self) -> StoreResult<Vec<UserDocument>>;

    /// Skip `offset` documents and return at most `limit`, in natural order.
    async fn find_page(&self, offset: u64, limit: i64) -> StoreResult<Vec<UserDocument>>;
}

const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Time budget shared by every store call of one operation.
///
/// The clock starts at [`StoreDeadline::start`]; later calls only get what is
/// left of the budget.
#[derive(Debug, Clone, Copy)]
pub struct StoreDeadline {
    budget: Duration,
    expires_at: Instant,
}

impl StoreDeadline {
    /// Budgets too large to represent as an instant are capped at roughly 30 years.
    pub fn start(budget: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(budget)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self { budget, expires_at }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// Drive `call` until it finishes or the deadline passes.
    pub async fn run<T, F>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        match tokio::time::timeout_at(self.expires_at, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(budget = ?self.budget, "Store call cancelled at deadline");
                Err(StoreError::Timeout(self.budget))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_run_returns_result_within_budget() {
        let deadline = StoreDeadline::start(Duration::from_secs(10));

        let value = deadline
            .run(async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Ok::<_, StoreError>(7)
            })
            .await
            .unwrap();

        assert_eq!(value, 7);
        assert!(deadline.remaining() <= Duration::from_secs(7));
        assert!(deadline.remaining() > Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_times_out_with_budget() {
        let deadline = StoreDeadline::start(Duration::from_secs(10));

        let err = deadline
            .run(std::future::pending::<StoreResult<()>>())
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Timeout(d) if d == Duration::from_secs(10)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_budget_is_shared_between_calls() {
        let deadline = StoreDeadline::start(Duration::from_secs(10));

        deadline
            .run(async {
                tokio::time::sleep(Duration::from_secs(8)).await;
                Ok::<_, StoreError>(())
            })
            .await
            .unwrap();

        let second = deadline
            .run(async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Ok::<_, StoreError>(())
            })
            .await;

        assert!(matches!(second, Err(StoreError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_huge_budget_does_not_overflow() {
        let deadline = StoreDeadline::start(Duration::from_secs(u64::MAX));

        assert_eq!(deadline.budget(), Duration::from_secs(u64::MAX));
        assert!(deadline.remaining() > Duration::from_secs(86_400 * 365));

        let value = deadline.run(async { Ok::<_, StoreError>(1) }).await.unwrap();
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn test_backend_errors_pass_through() {
        let deadline = StoreDeadline::start(Duration::from_secs(10));

        let err = deadline
            .run(async { Err::<(), _>(StoreError::Backend("connection reset".into())) })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "connection reset");
    }
}
