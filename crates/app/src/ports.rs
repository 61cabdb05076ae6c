//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod device_repo;
pub mod mission_repo;
pub mod points_repo;
pub mod room_repo;
pub mod seed;
pub mod stats_repo;
pub mod user_repo;

pub use device_repo::DeviceRepository;
pub use mission_repo::MissionRepository;
pub use points_repo::PointsRepository;
pub use room_repo::RoomRepository;
pub use seed::SeedRepository;
pub use stats_repo::StatsRepository;
pub use user_repo::UserRepository;

/// One adapter's full set of repositories.
///
/// Lets the HTTP layer stay generic over a single type parameter instead of
/// one per port. Repositories are cheap handles over a shared store, so
/// services each get their own clone.
pub trait Repositories: Send + Sync + 'static {
    type Devices: DeviceRepository + Clone + Send + Sync + 'static;
    type Rooms: RoomRepository + Clone + Send + Sync + 'static;
    type Missions: MissionRepository + Clone + Send + Sync + 'static;
    type Points: PointsRepository + Clone + Send + Sync + 'static;
    type Users: UserRepository + Clone + Send + Sync + 'static;
    type Stats: StatsRepository + Clone + Send + Sync + 'static;

    fn devices(&self) -> Self::Devices;
    fn rooms(&self) -> Self::Rooms;
    fn missions(&self) -> Self::Missions;
    fn points(&self) -> Self::Points;
    fn users(&self) -> Self::Users;
    fn stats(&self) -> Self::Stats;
}
