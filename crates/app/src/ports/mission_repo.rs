//! Mission repository port — mission reads and lifecycle transitions.

use std::future::Future;

use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::MissionId;
use ecocampus_domain::mission::{Mission, MissionCategory};

/// Repository for persisting and querying [`Mission`]s.
pub trait MissionRepository {
    /// List missions, ordered by id. `None` lists every category.
    fn list(
        &self,
        category: Option<MissionCategory>,
    ) -> impl Future<Output = Result<Vec<Mission>, CampusError>> + Send;

    /// Get a mission by its identifier.
    fn get_by_id(
        &self,
        id: MissionId,
    ) -> impl Future<Output = Result<Option<Mission>, CampusError>> + Send;

    /// Apply [`Mission::start`] and persist it. `None` when missing.
    fn start(
        &self,
        id: MissionId,
    ) -> impl Future<Output = Result<Option<Mission>, CampusError>> + Send;

    /// Apply [`Mission::complete`] and credit the point summary, savings and
    /// character progress singletons, all in one unit of work.
    /// `None` when missing.
    fn complete(
        &self,
        id: MissionId,
    ) -> impl Future<Output = Result<Option<Mission>, CampusError>> + Send;
}
