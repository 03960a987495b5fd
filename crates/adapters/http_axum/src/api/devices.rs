//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use devicehub_app::ports::{DeviceRepository, DeviceTypeRepository, EmployeeRepository};
use devicehub_domain::device::{DeviceDetails, DeviceDraft, DeviceSummary};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::{DeviceId, EmployeeId};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Request body for creating or replacing a device.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRequest {
    pub name: String,
    pub device_type_name: String,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub additional_properties: Value,
}

impl From<DeviceRequest> for DeviceDraft {
    fn from(req: DeviceRequest) -> Self {
        Self {
            name: req.name,
            device_type_name: req.device_type_name,
            is_enabled: req.is_enabled,
            additional_properties: req.additional_properties,
        }
    }
}

/// Listing entry: identifier and name only.
#[derive(Debug, Serialize)]
pub struct DeviceListItem {
    pub id: DeviceId,
    pub name: String,
}

impl From<DeviceSummary> for DeviceListItem {
    fn from(summary: DeviceSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
        }
    }
}

/// The employee currently holding a device.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentEmployee {
    pub id: EmployeeId,
    pub full_name: String,
}

/// Full device projection returned by `GET /api/devices/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetailResponse {
    pub name: String,
    pub device_type_name: Option<String>,
    pub is_enabled: bool,
    pub additional_properties: Option<Value>,
    pub current_employee: Option<CurrentEmployee>,
}

impl TryFrom<DeviceDetails> for DeviceDetailResponse {
    type Error = DeviceHubError;

    fn try_from(details: DeviceDetails) -> Result<Self, Self::Error> {
        let additional_properties = details.device.properties()?;
        let current_employee = details
            .current_assignment()
            .map(|assignment| CurrentEmployee {
                id: assignment.employee_id,
                full_name: assignment.person.joined_name(),
            });

        Ok(Self {
            name: details.device.name,
            device_type_name: details.device_type_name,
            is_enabled: details.device.is_enabled,
            additional_properties,
            current_employee,
        })
    }
}

/// Body of a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedDevice {
    pub id: DeviceId,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DeviceListItem>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<DeviceDetailResponse>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(DeviceId),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(id) => (
                StatusCode::CREATED,
                [(header::LOCATION, format!("/api/devices/{id}"))],
                Json(CreatedDevice { id }),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<DR, TR, ER>(
    State(state): State<AppState<DR, TR, ER>>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(
        devices.into_iter().map(DeviceListItem::from).collect(),
    )))
}

/// `GET /api/devices/{id}`
pub async fn get<DR, TR, ER>(
    State(state): State<AppState<DR, TR, ER>>,
    ApiPath(id): ApiPath<DeviceId>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let details = state.device_service.get_device(id).await?;
    Ok(GetResponse::Ok(Json(DeviceDetailResponse::try_from(
        details,
    )?)))
}

/// `POST /api/devices`
pub async fn create<DR, TR, ER>(
    State(state): State<AppState<DR, TR, ER>>,
    ApiJson(req): ApiJson<DeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let id = state.device_service.create_device(req.into()).await?;
    Ok(CreateResponse::Created(id))
}

/// `PUT /api/devices/{id}`
pub async fn update<DR, TR, ER>(
    State(state): State<AppState<DR, TR, ER>>,
    ApiPath(id): ApiPath<DeviceId>,
    ApiJson(req): ApiJson<DeviceRequest>,
) -> Result<UpdateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    state.device_service.update_device(id, req.into()).await?;
    Ok(UpdateResponse::NoContent)
}

/// `DELETE /api/devices/{id}`
pub async fn delete<DR, TR, ER>(
    State(state): State<AppState<DR, TR, ER>>,
    ApiPath(id): ApiPath<DeviceId>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    state.device_service.delete_device(id).await?;
    Ok(DeleteResponse::NoContent)
}
