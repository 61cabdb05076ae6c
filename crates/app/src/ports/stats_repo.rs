//! Stats repository port — the read-mostly summary singletons.

use std::future::Future;

use ecocampus_domain::error::CampusError;
use ecocampus_domain::stats::{
    CampusStat, CharacterProgress, RankProgress, SavingsStat, StatusCard, Streak,
};

/// Repository for the summary rows behind the home and character screens.
///
/// Every singleton getter creates the row from its type's `Default` on first
/// access; later calls are plain reads.
pub trait StatsRepository {
    /// Savings singleton.
    fn savings(&self) -> impl Future<Output = Result<SavingsStat, CampusError>> + Send;

    /// Character progress singleton.
    fn character_progress(
        &self,
    ) -> impl Future<Output = Result<CharacterProgress, CampusError>> + Send;

    /// Character progress without creating it.
    fn find_character_progress(
        &self,
    ) -> impl Future<Output = Result<Option<CharacterProgress>, CampusError>> + Send;

    /// Status cards, in stored order.
    fn status_cards(&self) -> impl Future<Output = Result<Vec<StatusCard>, CampusError>> + Send;

    /// Streak singleton.
    fn streak(&self) -> impl Future<Output = Result<Streak, CampusError>> + Send;

    /// Rank progress singleton.
    fn rank_progress(&self) -> impl Future<Output = Result<RankProgress, CampusError>> + Send;

    /// Campus stats singleton.
    fn campus_stat(&self) -> impl Future<Output = Result<CampusStat, CampusError>> + Send;
}
