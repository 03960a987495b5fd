//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use devicehub_app::ports::{DeviceRepository, DeviceTypeRepository, EmployeeRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and exposes a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<DR, TR, ER>(state: AppState<DR, TR, ER>) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
