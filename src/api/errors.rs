use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::ScandeckError;

impl IntoResponse for ScandeckError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ScandeckError::Config(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ScandeckError::FindingNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
