//! User repository port — user-scoped rows and the leaderboard.

use std::future::Future;

use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::UserId;
use ecocampus_domain::ranking::RankingEntry;
use ecocampus_domain::user::{User, UserActivity, UserStat};

/// Repository for [`User`]s and the rows that hang off them.
pub trait UserRepository {
    /// Get a user by identifier.
    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, CampusError>> + Send;

    /// Get the user's stat row, creating the zero row on first access.
    fn stat(&self, id: UserId) -> impl Future<Output = Result<UserStat, CampusError>> + Send;

    /// Read the user's stat row without creating it.
    fn find_stat(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<UserStat>, CampusError>> + Send;

    /// The user's activity feed, newest first.
    fn activities(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Vec<UserActivity>, CampusError>> + Send;

    /// The leaderboard, ordered by rank ascending.
    fn ranking_entries(
        &self,
    ) -> impl Future<Output = Result<Vec<RankingEntry>, CampusError>> + Send;
}
