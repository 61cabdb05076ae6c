//! Ranking service — the leaderboard and the caller's place on it.

use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::UserId;
use ecocampus_domain::ranking::{
    DEFAULT_RANKING_TYPE, DEFAULT_TIME_PERIOD, Leaderboard, MyRank,
};

use crate::ports::{PointsRepository, UserRepository};

/// Application service composing the ranking screen. Read-only.
pub struct RankingService<U, P> {
    users: U,
    points: P,
}

impl<U: UserRepository, P: PointsRepository> RankingService<U, P> {
    /// Create a new service backed by the given repositories.
    pub fn new(users: U, points: P) -> Self {
        Self { users, points }
    }

    /// Build the leaderboard for `user`.
    ///
    /// `ranking_type` and `time_period` are echoed back unchanged and do not
    /// affect the list; missing values take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        user: UserId,
        ranking_type: Option<String>,
        time_period: Option<String>,
    ) -> Result<Leaderboard, CampusError> {
        let profile = self.users.get_by_id(user).await?;
        let summary = self.points.find_summary().await?;
        let stat = self.users.find_stat(user).await?;
        let ranking_list = self.users.ranking_entries().await?;
        Ok(Leaderboard {
            ranking_type: ranking_type.unwrap_or_else(|| DEFAULT_RANKING_TYPE.to_string()),
            time_period: time_period.unwrap_or_else(|| DEFAULT_TIME_PERIOD.to_string()),
            my_rank: MyRank::compose(profile.as_ref(), summary.as_ref(), stat.as_ref()),
            ranking_list,
        })
    }
}
