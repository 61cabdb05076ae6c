//! Room service — room listing, selection and the resulting location.

use ecocampus_domain::error::{CampusError, NotFoundError};
use ecocampus_domain::id::RoomId;
use ecocampus_domain::room::Room;
use ecocampus_domain::stats::LocationStat;

use crate::ports::RoomRepository;

/// A room that was just selected and the location it now points to.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSelection {
    pub room: Room,
    pub location: LocationStat,
}

/// Application service for rooms and the current location.
pub struct RoomService<R> {
    repo: R,
}

impl<R: RoomRepository> RoomService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all rooms, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<Room>, CampusError> {
        self.repo.get_all().await
    }

    /// Resolve the location shown on the home screen.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn current_location(&self) -> Result<LocationStat, CampusError> {
        self.repo.current_location().await
    }

    /// Make `id` the only selected room.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn select_room(&self, id: RoomId) -> Result<RoomSelection, CampusError> {
        let (room, location) = self.repo.select(id).await?.ok_or_else(|| NotFoundError {
            entity: "Room",
            id: id.to_string(),
        })?;
        tracing::info!(room = %room.name, "room selected");
        Ok(RoomSelection { room, location })
    }
}
