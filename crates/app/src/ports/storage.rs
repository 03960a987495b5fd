//! Storage port — repository traits for persistence.

use std::future::Future;

use devicehub_domain::device::{Device, DeviceDetails, DeviceSummary, NewDevice};
use devicehub_domain::device_type::DeviceType;
use devicehub_domain::employee::{Employee, EmployeeSummary};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::{DeviceId, EmployeeId};

/// Repository for persisting and querying [`Device`]s.
pub trait DeviceRepository {
    /// Insert a new device and return it with its store-assigned id.
    fn create(
        &self,
        device: NewDevice,
    ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send;

    /// Get a bare device row by id.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send;

    /// Get a device with its type name and full assignment history, each
    /// assignment carrying the assigned employee's person.
    fn get_details(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<DeviceDetails>, DeviceHubError>> + Send;

    /// List the id and name of every device, in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<DeviceSummary>, DeviceHubError>> + Send;

    /// Overwrite an existing device row.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, DeviceHubError>> + Send;

    /// Delete a device by id.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DeviceHubError>> + Send;
}

/// Read-only access to [`DeviceType`]s.
pub trait DeviceTypeRepository {
    /// Find a device type by exact name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DeviceType>, DeviceHubError>> + Send;
}

/// Read-only access to [`Employee`]s.
pub trait EmployeeRepository {
    /// List every employee's id and person, in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<EmployeeSummary>, DeviceHubError>> + Send;

    /// Get an employee with person and position.
    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, DeviceHubError>> + Send;
}
