//! Device service — use-cases for managing devices.

use devicehub_domain::device::{DeviceDetails, DeviceDraft, DeviceSummary, NewDevice};
use devicehub_domain::device_type::DeviceType;
use devicehub_domain::error::{DeviceHubError, NotFoundError, ValidationError};
use devicehub_domain::id::DeviceId;

use crate::ports::{DeviceRepository, DeviceTypeRepository};

/// Application service for device CRUD operations.
pub struct DeviceService<DR, TR> {
    repo: DR,
    type_repo: TR,
}

impl<DR: DeviceRepository, TR: DeviceTypeRepository> DeviceService<DR, TR> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: DR, type_repo: TR) -> Self {
        Self { repo, type_repo }
    }

    /// List the id and name of every device.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<Vec<DeviceSummary>, DeviceHubError> {
        self.repo.get_all().await
    }

    /// Look up a device with its type and assignment history.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<DeviceDetails, DeviceHubError> {
        self.repo
            .get_details(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a device whose type is referenced by name.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] if the device type name does not
    /// resolve, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(device_name = %draft.name))]
    pub async fn create_device(&self, draft: DeviceDraft) -> Result<DeviceId, DeviceHubError> {
        let device_type = self.resolve_type(&draft.device_type_name).await?;
        let created = self
            .repo
            .create(NewDevice::from_draft(draft, &device_type))
            .await?;
        tracing::debug!(device_id = %created.id, "device created");
        Ok(created.id)
    }

    /// Overwrite name, type, enabled flag and properties of an existing device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists,
    /// [`DeviceHubError::Validation`] if the device type name does not
    /// resolve, or a storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        draft: DeviceDraft,
    ) -> Result<(), DeviceHubError> {
        let mut device = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let device_type = self.resolve_type(&draft.device_type_name).await?;
        device.apply(draft, &device_type);
        self.repo.update(device).await?;
        Ok(())
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), DeviceHubError> {
        let device = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        self.repo.delete(device.id).await
    }

    async fn resolve_type(&self, name: &str) -> Result<DeviceType, DeviceHubError> {
        self.type_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| ValidationError::InvalidDeviceTypeName.into())
    }
}

fn not_found(id: DeviceId) -> DeviceHubError {
    NotFoundError {
        entity: "Device",
        id: id.to_string(),
    }
    .into()
}
