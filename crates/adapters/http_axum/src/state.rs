//! Shared application state for axum handlers.

use std::sync::Arc;

use ecocampus_app::ports::Repositories;
use ecocampus_app::services::device_service::DeviceService;
use ecocampus_app::services::mission_service::MissionService;
use ecocampus_app::services::points_service::PointsService;
use ecocampus_app::services::ranking_service::RankingService;
use ecocampus_app::services::room_service::RoomService;
use ecocampus_app::services::stats_service::StatsService;
use ecocampus_app::services::user_service::UserService;
use ecocampus_domain::id::UserId;

/// Application state shared across all axum handlers.
///
/// Generic over one repository bundle to avoid dynamic dispatch. `Clone` is
/// implemented manually so the bundle itself does not need to be `Clone`;
/// only the `Arc` wrappers are cloned.
pub struct AppState<R: Repositories> {
    /// Device listing and switching.
    pub device_service: Arc<DeviceService<R::Devices>>,
    /// Rooms and the current location.
    pub room_service: Arc<RoomService<R::Rooms>>,
    /// Mission catalog and lifecycle.
    pub mission_service: Arc<MissionService<R::Missions, R::Devices>>,
    /// Balance, catalogs, exchange and donation.
    pub points_service: Arc<PointsService<R::Points>>,
    /// Summary singletons behind the home and character screens.
    pub stats_service: Arc<StatsService<R::Stats, R::Users>>,
    /// Profile, stats and activity feed.
    pub user_service: Arc<UserService<R::Users>>,
    /// Leaderboard.
    pub ranking_service: Arc<RankingService<R::Users, R::Points>>,
    /// Identity every request acts as.
    pub user_id: UserId,
}

impl<R: Repositories> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            room_service: Arc::clone(&self.room_service),
            mission_service: Arc::clone(&self.mission_service),
            points_service: Arc::clone(&self.points_service),
            stats_service: Arc::clone(&self.stats_service),
            user_service: Arc::clone(&self.user_service),
            ranking_service: Arc::clone(&self.ranking_service),
            user_id: self.user_id,
        }
    }
}

impl<R: Repositories> AppState<R> {
    /// Build every service from `repos`, acting as `user_id`.
    pub fn new(repos: &R, user_id: UserId) -> Self {
        Self {
            device_service: Arc::new(DeviceService::new(repos.devices())),
            room_service: Arc::new(RoomService::new(repos.rooms())),
            mission_service: Arc::new(MissionService::new(repos.missions(), repos.devices())),
            points_service: Arc::new(PointsService::new(repos.points())),
            stats_service: Arc::new(StatsService::new(repos.stats(), repos.users())),
            user_service: Arc::new(UserService::new(repos.users())),
            ranking_service: Arc::new(RankingService::new(repos.users(), repos.points())),
            user_id,
        }
    }
}
