//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod employees;

use axum::Router;
use axum::routing::get;

use devicehub_app::ports::{DeviceRepository, DeviceTypeRepository, EmployeeRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR, TR, ER>() -> Router<AppState<DR, TR, ER>>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        // Devices
        .route(
            "/devices",
            get(devices::list::<DR, TR, ER>).post(devices::create::<DR, TR, ER>),
        )
        .route(
            "/devices/{id}",
            get(devices::get::<DR, TR, ER>)
                .put(devices::update::<DR, TR, ER>)
                .delete(devices::delete::<DR, TR, ER>),
        )
        // Employees
        .route("/employees", get(employees::list::<DR, TR, ER>))
        .route("/employees/{id}", get(employees::get::<DR, TR, ER>))
}
