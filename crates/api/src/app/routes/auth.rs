//! Mock authentication routes.
//!
//! Credentials are never verified: login hands back a static token and a
//! fixed profile. A development-mode stand-in; real identity is an external
//! collaborator.

use axum::{http::StatusCode, response::IntoResponse, routing::{get, post}, Json, Router};

use crate::app::dto;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/user", get(current_user))
}

pub async fn login(Json(body): Json<dto::LoginRequest>) -> impl IntoResponse {
    tracing::info!(email = %body.email, "login attempt");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "token": "mock-jwt-token",
            "user": {
                "id": 1,
                "name": "John Doe",
                "email": body.email,
                "role": "admin",
            },
        })),
    )
}

pub async fn register(Json(body): Json<dto::RegisterRequest>) -> impl IntoResponse {
    tracing::info!(email = %body.email, "new user registration");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": "User registered successfully",
            "user": {
                "id": 1,
                "name": body.name,
                "email": body.email,
                "role": "user",
            },
        })),
    )
}

pub async fn current_user() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "user": {
                "id": 1,
                "name": "John Doe",
                "email": "john.doe@example.com",
                "role": "admin",
                "department": "Operations",
            },
        })),
    )
}
