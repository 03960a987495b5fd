//! JSON REST handlers for employees.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicehub_app::ports::{DeviceRepository, DeviceTypeRepository, EmployeeRepository};
use devicehub_domain::employee::{Employee, EmployeeSummary};
use devicehub_domain::id::{EmployeeId, PositionId};
use devicehub_domain::time::Timestamp;

use crate::error::ApiError;
use crate::extract::ApiPath;
use crate::state::AppState;

/// Listing entry: identifier and composed full name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListItem {
    pub id: EmployeeId,
    pub full_name: String,
}

impl From<EmployeeSummary> for EmployeeListItem {
    fn from(summary: EmployeeSummary) -> Self {
        Self {
            id: summary.id,
            full_name: summary.person.full_name(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub id: PositionId,
    pub name: String,
}

/// Employee projection returned by `GET /api/employees/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailResponse {
    pub full_name: String,
    pub salary: f64,
    pub hire_date: Timestamp,
    pub position: PositionResponse,
}

impl From<Employee> for EmployeeDetailResponse {
    fn from(employee: Employee) -> Self {
        Self {
            full_name: employee.person.full_name(),
            salary: employee.salary,
            hire_date: employee.hire_date,
            position: PositionResponse {
                id: employee.position.id,
                name: employee.position.name,
            },
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<EmployeeListItem>>),
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
    Ok(Json<EmployeeDetailResponse>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/employees`
pub async fn list<DR, TR, ER>(
    State(state): State<AppState<DR, TR, ER>>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;
    Ok(ListResponse::Ok(Json(
        employees.into_iter().map(EmployeeListItem::from).collect(),
    )))
}

/// `GET /api/employees/{id}`
pub async fn get<DR, TR, ER>(
    State(state): State<AppState<DR, TR, ER>>,
    ApiPath(id): ApiPath<EmployeeId>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    TR: DeviceTypeRepository + Send + Sync + 'static,
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let employee = state.employee_service.get_employee(id).await?;
    Ok(GetResponse::Ok(Json(employee.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicehub_domain::employee::{Person, Position};
    use serde_json::json;

    #[test]
    fn should_project_employee_detail() {
        let employee = Employee {
            id: EmployeeId::new(2),
            salary: 5100.0,
            hire_date: "2021-03-01T09:00:00".parse().unwrap(),
            person: Person {
                first_name: "Jane".to_string(),
                middle_name: Some(String::new()),
                last_name: "Doe".to_string(),
            },
            position: Position {
                id: PositionId::new(4),
                name: "Designer".to_string(),
            },
        };

        let value = serde_json::to_value(EmployeeDetailResponse::from(employee)).unwrap();
        assert_eq!(
            value,
            json!({
                "fullName": "Jane Doe",
                "salary": 5100.0,
                "hireDate": "2021-03-01T09:00:00",
                "position": {"id": 4, "name": "Designer"}
            })
        );
    }
}
