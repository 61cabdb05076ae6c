//! Stats service — the summary figures on the home and character screens.

use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::UserId;
use ecocampus_domain::stats::{
    CampusStat, CharacterProgress, CharacterSummary, RankProgress, SavingsStat, StatusCard, Streak,
};

use crate::ports::{StatsRepository, UserRepository};

/// Application service for the read-mostly summary rows.
pub struct StatsService<S, U> {
    stats: S,
    users: U,
}

impl<S: StatsRepository, U: UserRepository> StatsService<S, U> {
    /// Create a new service backed by the given repositories.
    pub fn new(stats: S, users: U) -> Self {
        Self { stats, users }
    }

    /// Character card for the home screen.
    ///
    /// Falls back to level 1 with no growth when the user does not exist.
    /// Never creates the progress row.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn home_character(&self, user: UserId) -> Result<CharacterSummary, CampusError> {
        let Some(user) = self.users.get_by_id(user).await? else {
            return Ok(CharacterSummary::default());
        };
        let growth_rate = self
            .stats
            .find_character_progress()
            .await?
            .map_or(0, |cp| cp.growth_rate());
        Ok(CharacterSummary {
            level: user.level,
            growth_rate,
        })
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn savings(&self) -> Result<SavingsStat, CampusError> {
        self.stats.savings().await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn character_progress(&self) -> Result<CharacterProgress, CampusError> {
        self.stats.character_progress().await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn status_cards(&self) -> Result<Vec<StatusCard>, CampusError> {
        self.stats.status_cards().await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn streak(&self) -> Result<Streak, CampusError> {
        self.stats.streak().await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn rank_progress(&self) -> Result<RankProgress, CampusError> {
        self.stats.rank_progress().await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn campus_stat(&self) -> Result<CampusStat, CampusError> {
        self.stats.campus_stat().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocampus_domain::ranking::RankingEntry;
    use ecocampus_domain::user::{User, UserActivity, UserStat};

    struct FixedStats(Option<CharacterProgress>);

    impl StatsRepository for FixedStats {
        async fn savings(&self) -> Result<SavingsStat, CampusError> {
            Ok(SavingsStat::default())
        }
        async fn character_progress(&self) -> Result<CharacterProgress, CampusError> {
            Ok(self.0.clone().unwrap_or_default())
        }
        async fn find_character_progress(&self) -> Result<Option<CharacterProgress>, CampusError> {
            Ok(self.0.clone())
        }
        async fn status_cards(&self) -> Result<Vec<StatusCard>, CampusError> {
            Ok(vec![])
        }
        async fn streak(&self) -> Result<Streak, CampusError> {
            Ok(Streak::default())
        }
        async fn rank_progress(&self) -> Result<RankProgress, CampusError> {
            Ok(RankProgress::default())
        }
        async fn campus_stat(&self) -> Result<CampusStat, CampusError> {
            Ok(CampusStat::default())
        }
    }

    struct FixedUsers(Option<User>);

    impl UserRepository for FixedUsers {
        async fn get_by_id(&self, id: UserId) -> Result<Option<User>, CampusError> {
            Ok(self.0.clone().filter(|u| u.id == id))
        }
        async fn stat(&self, _id: UserId) -> Result<UserStat, CampusError> {
            Ok(UserStat::default())
        }
        async fn find_stat(&self, _id: UserId) -> Result<Option<UserStat>, CampusError> {
            Ok(None)
        }
        async fn activities(&self, _id: UserId) -> Result<Vec<UserActivity>, CampusError> {
            Ok(vec![])
        }
        async fn ranking_entries(&self) -> Result<Vec<RankingEntry>, CampusError> {
            Ok(vec![])
        }
    }

    fn user() -> User {
        User {
            id: UserId::new(1),
            name: "나환경".to_string(),
            department: "사무행정과".to_string(),
            level: 2,
            character: "나무".to_string(),
            points: 850,
        }
    }

    #[tokio::test]
    async fn should_fall_back_when_user_missing() {
        let svc = StatsService::new(FixedStats(None), FixedUsers(None));
        let summary = svc.home_character(UserId::new(1)).await.unwrap();
        assert_eq!(summary, CharacterSummary { level: 1, growth_rate: 0 });
    }

    #[tokio::test]
    async fn should_report_zero_growth_without_progress_row() {
        let svc = StatsService::new(FixedStats(None), FixedUsers(Some(user())));
        let summary = svc.home_character(UserId::new(1)).await.unwrap();
        assert_eq!(summary, CharacterSummary { level: 2, growth_rate: 0 });
    }

    #[tokio::test]
    async fn should_truncate_progress_into_growth_rate() {
        let progress = CharacterProgress {
            progress: 35.9,
            ..CharacterProgress::default()
        };
        let svc = StatsService::new(FixedStats(Some(progress)), FixedUsers(Some(user())));
        let summary = svc.home_character(UserId::new(1)).await.unwrap();
        assert_eq!(summary.growth_rate, 35);
    }

    #[tokio::test]
    async fn should_ignore_other_users() {
        let svc = StatsService::new(FixedStats(None), FixedUsers(Some(user())));
        let summary = svc.home_character(UserId::new(7)).await.unwrap();
        assert_eq!(summary.level, 1);
    }
}
