use axum::Router;

pub mod auth;
pub mod inventory;
pub mod system;

/// Router for all `/api/v1` endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/inventory", inventory::router())
}
