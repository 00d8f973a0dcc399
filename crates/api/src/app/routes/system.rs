use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": "Server is healthy",
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}
