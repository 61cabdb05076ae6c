//! Device service — use-cases for the classroom appliances.

use ecocampus_domain::device::Device;
use ecocampus_domain::error::{CampusError, NotFoundError};
use ecocampus_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for listing and switching devices.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<Vec<Device>, CampusError> {
        self.repo.get_all().await
    }

    /// Switch a device on or off, applying every side effect of the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_device(&self, id: DeviceId) -> Result<Device, CampusError> {
        let device = self.repo.toggle(id).await?.ok_or_else(|| NotFoundError {
            entity: "Device",
            id: id.to_string(),
        })?;
        tracing::info!(device = %device.id, status = %device.status, "device toggled");
        Ok(device)
    }
}
