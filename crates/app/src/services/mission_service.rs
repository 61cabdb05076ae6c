//! Mission service — mission listing, detail and lifecycle transitions.

use ecocampus_domain::error::{CampusError, NotFoundError};
use ecocampus_domain::id::MissionId;
use ecocampus_domain::mission::{Mission, MissionCategory, MissionDetail};

use crate::ports::{DeviceRepository, MissionRepository};

/// Application service for eco missions.
///
/// Holds the device repository too, because the detail screen lists the
/// devices of the mission room.
pub struct MissionService<M, D> {
    missions: M,
    devices: D,
}

impl<M: MissionRepository, D: DeviceRepository> MissionService<M, D> {
    /// Create a new service backed by the given repositories.
    pub fn new(missions: M, devices: D) -> Self {
        Self { missions, devices }
    }

    /// List missions for a raw category filter.
    ///
    /// `all` lists everything; any other known label filters by equality and
    /// an unknown label matches nothing.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_missions(&self, category: &str) -> Result<Vec<Mission>, CampusError> {
        match category.parse::<MissionCategory>() {
            Ok(MissionCategory::All) => self.missions.list(None).await,
            Ok(category) => self.missions.list(Some(category)).await,
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Look up a mission with the context of its detail screen.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no mission with `id` exists,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn get_mission_detail(&self, id: MissionId) -> Result<MissionDetail, CampusError> {
        let mission = self.missions.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        let devices = self.devices.get_all().await?;
        Ok(MissionDetail::new(mission, devices))
    }

    /// Move a mission into `in-progress`.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no mission with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn start_mission(&self, id: MissionId) -> Result<Mission, CampusError> {
        let mission = self.missions.start(id).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(mission = %mission.id, "mission started");
        Ok(mission)
    }

    /// Complete a mission and credit its reward.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no mission with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn complete_mission(&self, id: MissionId) -> Result<Mission, CampusError> {
        let mission = self
            .missions
            .complete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(mission = %mission.id, points = mission.points, "mission completed");
        Ok(mission)
    }
}

fn not_found(id: MissionId) -> NotFoundError {
    NotFoundError {
        entity: "Mission",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocampus_domain::device::{Device, DeviceKind, DeviceStatus};
    use ecocampus_domain::id::DeviceId;
    use ecocampus_domain::mission::{MISSION_TIMER_SECONDS, MissionStatus};
    use std::sync::Mutex;

    struct InMemoryMissionRepo {
        store: Mutex<Vec<Mission>>,
        credited: Mutex<i64>,
    }

    impl MissionRepository for InMemoryMissionRepo {
        async fn list(
            &self,
            category: Option<MissionCategory>,
        ) -> Result<Vec<Mission>, CampusError> {
            let store = self.store.lock().unwrap();
            Ok(store
                .iter()
                .filter(|m| category.is_none_or(|c| m.category == c))
                .cloned()
                .collect())
        }

        async fn get_by_id(&self, id: MissionId) -> Result<Option<Mission>, CampusError> {
            let store = self.store.lock().unwrap();
            Ok(store.iter().find(|m| m.id == id).cloned())
        }

        async fn start(&self, id: MissionId) -> Result<Option<Mission>, CampusError> {
            let mut store = self.store.lock().unwrap();
            Ok(store.iter_mut().find(|m| m.id == id).map(|m| {
                m.start();
                m.clone()
            }))
        }

        async fn complete(&self, id: MissionId) -> Result<Option<Mission>, CampusError> {
            let mut store = self.store.lock().unwrap();
            let Some(mission) = store.iter_mut().find(|m| m.id == id) else {
                return Ok(None);
            };
            *self.credited.lock().unwrap() += mission.complete();
            Ok(Some(mission.clone()))
        }
    }

    struct FixedDevices(Vec<Device>);

    impl DeviceRepository for FixedDevices {
        async fn get_all(&self) -> Result<Vec<Device>, CampusError> {
            Ok(self.0.clone())
        }

        async fn toggle(&self, _id: DeviceId) -> Result<Option<Device>, CampusError> {
            Ok(None)
        }
    }

    fn mission(id: i64, category: MissionCategory) -> Mission {
        Mission {
            id: MissionId::new(id),
            title: format!("mission {id}"),
            emoji: None,
            category,
            points: 10,
            progress: 0.0,
            total_steps: 4,
            current_step: 0,
            status: MissionStatus::Available,
        }
    }

    fn make_service() -> MissionService<InMemoryMissionRepo, FixedDevices> {
        let missions = InMemoryMissionRepo {
            store: Mutex::new(vec![
                mission(1, MissionCategory::Content),
                mission(2, MissionCategory::Recycle),
                mission(3, MissionCategory::Recycle),
            ]),
            credited: Mutex::new(0),
        };
        let devices = FixedDevices(vec![Device {
            id: DeviceId::new(1),
            name: "전등".to_string(),
            status: DeviceStatus::Off,
            icon: "bulb".to_string(),
            power_usage: Some(1.2),
            temperature: None,
            kind: DeviceKind::Light,
        }]);
        MissionService::new(missions, devices)
    }

    #[tokio::test]
    async fn should_list_everything_when_category_is_all() {
        let svc = make_service();
        assert_eq!(svc.list_missions("all").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_filter_by_category() {
        let svc = make_service();
        let recycle = svc.list_missions("recycle").await.unwrap();
        assert_eq!(recycle.len(), 2);
        assert!(recycle.iter().all(|m| m.category == MissionCategory::Recycle));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_category_unknown() {
        let svc = make_service();
        assert!(svc.list_missions("sports").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_attach_devices_and_timer_to_detail() {
        let svc = make_service();
        let detail = svc.get_mission_detail(MissionId::new(1)).await.unwrap();
        assert_eq!(detail.devices.len(), 1);
        assert_eq!(detail.timer, MISSION_TIMER_SECONDS);
    }

    #[tokio::test]
    async fn should_return_not_found_when_detail_missing() {
        let svc = make_service();
        let result = svc.get_mission_detail(MissionId::new(42)).await;
        assert!(matches!(result, Err(CampusError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_start_then_complete_mission() {
        let svc = make_service();
        let started = svc.start_mission(MissionId::new(2)).await.unwrap();
        assert_eq!(started.status, MissionStatus::InProgress);
        let completed = svc.complete_mission(MissionId::new(2)).await.unwrap();
        assert_eq!(completed.status, MissionStatus::Completed);
        assert!((completed.progress - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_credit_twice_when_completed_twice() {
        let svc = make_service();
        svc.complete_mission(MissionId::new(1)).await.unwrap();
        svc.complete_mission(MissionId::new(1)).await.unwrap();
        assert_eq!(*svc.missions.credited.lock().unwrap(), 20);
    }

    #[tokio::test]
    async fn should_return_not_found_when_completing_missing_mission() {
        let svc = make_service();
        let result = svc.complete_mission(MissionId::new(42)).await;
        assert!(matches!(result, Err(CampusError::NotFound(_))));
    }
}
