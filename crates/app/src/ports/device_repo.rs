//! Device repository port — the classroom appliances and the toggle mutation.

use std::future::Future;

use ecocampus_domain::device::Device;
use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::DeviceId;

/// Repository for reading and switching [`Device`]s.
pub trait DeviceRepository {
    /// Get all devices, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, CampusError>> + Send;

    /// Flip a device on or off as one unit of work.
    ///
    /// Applies [`Device::toggle`], credits the savings and point singletons
    /// when the device ends up off, and recomputes the location power total
    /// from every device. Returns `None` when no device has `id`.
    fn toggle(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, CampusError>> + Send;
}
