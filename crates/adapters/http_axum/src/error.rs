//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicehub_domain::error::DeviceHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure an API endpoint can answer with, rendered as `{"error": ...}`.
pub enum ApiError {
    /// A service call failed.
    Domain(DeviceHubError),
    /// The request could not be extracted (bad path segment, bad body).
    Rejected {
        status: StatusCode,
        message: String,
    },
}

impl From<DeviceHubError> for ApiError {
    fn from(err: DeviceHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Rejected { status, message } => (status, message),
            Self::Domain(err) => domain_status(&err),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

fn domain_status(err: &DeviceHubError) -> (StatusCode, String) {
    match err {
        DeviceHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        DeviceHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        DeviceHubError::MalformedProperties(err) => {
            tracing::error!(error = %err, "stored additional properties are not valid JSON");
            internal()
        }
        DeviceHubError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            internal()
        }
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_string(),
    )
}
