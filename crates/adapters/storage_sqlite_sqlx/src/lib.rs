//! # ecocampus-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `ecocampus-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Run every multi-row write inside one transaction
//!
//! ## Dependency rule
//! Depends on `ecocampus-app` (for port traits) and `ecocampus-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;
mod error;
mod mission_repo;
mod points_repo;
mod pool;
mod room_repo;
mod seed;
mod singleton;
mod stats_repo;
mod user_repo;

use sqlx::SqlitePool;

use ecocampus_app::ports::Repositories;

pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use mission_repo::SqliteMissionRepository;
pub use points_repo::SqlitePointsRepository;
pub use pool::{Config, DEFAULT_MAX_CONNECTIONS, Database};
pub use room_repo::SqliteRoomRepository;
pub use seed::SqliteSeedRepository;
pub use stats_repo::SqliteStatsRepository;
pub use user_repo::SqliteUserRepository;

/// Every `SQLite` repository over one shared pool.
#[derive(Clone)]
pub struct SqliteRepositories {
    pool: SqlitePool,
}

impl SqliteRepositories {
    /// Bundle the repositories of `pool`.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Seeder over the same pool.
    #[must_use]
    pub fn seeder(&self) -> SqliteSeedRepository {
        SqliteSeedRepository::new(self.pool.clone())
    }
}

impl Repositories for SqliteRepositories {
    type Devices = SqliteDeviceRepository;
    type Rooms = SqliteRoomRepository;
    type Missions = SqliteMissionRepository;
    type Points = SqlitePointsRepository;
    type Users = SqliteUserRepository;
    type Stats = SqliteStatsRepository;

    fn devices(&self) -> Self::Devices {
        SqliteDeviceRepository::new(self.pool.clone())
    }

    fn rooms(&self) -> Self::Rooms {
        SqliteRoomRepository::new(self.pool.clone())
    }

    fn missions(&self) -> Self::Missions {
        SqliteMissionRepository::new(self.pool.clone())
    }

    fn points(&self) -> Self::Points {
        SqlitePointsRepository::new(self.pool.clone())
    }

    fn users(&self) -> Self::Users {
        SqliteUserRepository::new(self.pool.clone())
    }

    fn stats(&self) -> Self::Stats {
        SqliteStatsRepository::new(self.pool.clone())
    }
}
