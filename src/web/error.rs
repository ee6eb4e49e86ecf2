// ============================================================
// Layer 1b — HTTP Error Mapping
// ============================================================
// DigestError → HTTP status + JSON body:
//
//   InvalidInput → 400 Bad Request
//   Fetch        → 502 Bad Gateway
//
// Body shape: {"success": false, "error": "<message>"}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::domain::error::DigestError;

#[derive(Debug)]
pub struct ApiError(pub DigestError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DigestError::invalid(message))
    }

    pub fn status(&self) -> StatusCode {
        status_for(&self.0)
    }
}

pub fn status_for(err: &DigestError) -> StatusCode {
    match err {
        DigestError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DigestError::Fetch(_)        => StatusCode::BAD_GATEWAY,
    }
}

impl From<DigestError> for ApiError {
    fn from(err: DigestError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(%status, "Request failed: {}", self.0);
        } else {
            tracing::debug!(%status, "Request rejected: {}", self.0);
        }
        (status, Json(json!({ "success": false, "error": self.0.to_string() }))).into_response()
    }
}
