//! User service — profile, per-user stats and the activity feed.

use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::UserId;
use ecocampus_domain::user::{User, UserActivity, UserStat};

use crate::ports::UserRepository;

/// Application service for user-scoped reads.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The user's profile, or `None` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn profile(&self, id: UserId) -> Result<Option<User>, CampusError> {
        self.repo.get_by_id(id).await
    }

    /// The user's totals, created with zeros on first access.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn stats(&self, id: UserId) -> Result<UserStat, CampusError> {
        self.repo.stat(id).await
    }

    /// The user's activity feed, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn activities(&self, id: UserId) -> Result<Vec<UserActivity>, CampusError> {
        self.repo.activities(id).await
    }
}
