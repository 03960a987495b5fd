//! Shared application state for axum handlers.

use std::sync::Arc;

use devicehub_app::ports::{DeviceRepository, DeviceTypeRepository, EmployeeRepository};
use devicehub_app::services::device_service::DeviceService;
use devicehub_app::services::employee_service::EmployeeService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<DR, TR, ER> {
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<DR, TR>>,
    /// Employee lookup service.
    pub employee_service: Arc<EmployeeService<ER>>,
}

impl<DR, TR, ER> Clone for AppState<DR, TR, ER> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            employee_service: Arc::clone(&self.employee_service),
        }
    }
}

impl<DR, TR, ER> AppState<DR, TR, ER>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        device_service: DeviceService<DR, TR>,
        employee_service: EmployeeService<ER>,
    ) -> Self {
        Self {
            device_service: Arc::new(device_service),
            employee_service: Arc::new(employee_service),
        }
    }
}
