//! Room repository port — room listing, exclusive selection and the location
//! singleton that follows it.

use std::future::Future;

use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::RoomId;
use ecocampus_domain::room::Room;
use ecocampus_domain::stats::LocationStat;

/// Repository for [`Room`]s and the [`LocationStat`] singleton.
pub trait RoomRepository {
    /// Get all rooms, ordered by name.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, CampusError>> + Send;

    /// Resolve the current location as one unit of work.
    ///
    /// Selects the first room when none is selected, creates the location
    /// row from the selected room and the device power total when missing,
    /// and otherwise refreshes its room name only.
    fn current_location(&self) -> impl Future<Output = Result<LocationStat, CampusError>> + Send;

    /// Make `id` the only selected room and point the location at it.
    ///
    /// Returns `None` when no room has `id`; nothing is changed then.
    fn select(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<(Room, LocationStat)>, CampusError>> + Send;
}
