use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "message": <detail>, "code": <code>}`.
///
/// For 5xx the client only sees a generic message; the underlying error is
/// kept in `internal` and logged.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: String,
    pub code: u16,
    internal: Option<String>,
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "Invalid Request"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::Hash(_) | ServiceError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        let code = e.code();
        if status.is_server_error() {
            Self { status, title, detail: "internal server error".into(), code, internal: Some(e.to_string()) }
        } else {
            Self { status, title, detail: e.to_string(), code, internal: None }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if let Some(internal) = &self.internal {
            error!(status = %self.status, code = self.code, error = %internal, "request failed");
        }
        let body = serde_json::json!({
            "error": self.title,
            "message": self.detail,
            "code": self.code,
        });
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
