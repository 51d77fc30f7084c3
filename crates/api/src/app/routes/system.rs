use axum::http::{StatusCode, Uri};
use axum::Json;

use crate::app::errors::ApiError;

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "API is running..." }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Unmatched routes become a typed NotFound before any business logic runs.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Not Found - {uri}"))
}
