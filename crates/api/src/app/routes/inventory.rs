use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use stockledger_core::ItemId;
use stockledger_inventory::paginate;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/transaction", post(apply_transaction))
        .route("/:id/transactions", get(list_item_transactions))
}

fn parse_item_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid item id")
    })
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListItemsQuery>,
) -> axum::response::Response {
    let inventory = services.inventory().await;
    let matched = inventory.items_matching(&query.filter());
    let count = matched.len();

    let page = match (query.page, query.page_size) {
        (Some(page), Some(page_size)) => paginate(&matched, page, page_size),
        _ => &matched[..],
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": count,
            "data": page,
        })),
    )
        .into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let inventory = services.inventory().await;
    match inventory.item(id) {
        Ok(item) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "data": item })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let mut inventory = services.inventory().await;
    match inventory.create_item(body.into()) {
        Ok(item) => {
            tracing::info!(id = %item.id, sku = %item.sku, "inventory item created");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({ "success": true, "data": item })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut inventory = services.inventory().await;
    match inventory.update_item(id, body.into()) {
        Ok(item) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "data": item })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut inventory = services.inventory().await;
    match inventory.delete_item(id) {
        Ok(item) => {
            tracing::info!(id = %item.id, sku = %item.sku, "inventory item deleted");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "message": "Deleted successfully",
                    "data": item,
                })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn apply_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::TransactionRequest>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut inventory = services.inventory().await;
    match inventory.apply_movement(id, body.into(), Utc::now()) {
        Ok(applied) => {
            tracing::info!(
                item_id = %applied.item.id,
                transaction_id = %applied.transaction.id,
                kind = %applied.transaction.kind,
                quantity = applied.transaction.quantity,
                "stock movement applied"
            );
            (
                StatusCode::OK,
                Json(serde_json::json!({ "success": true, "data": applied })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_item_transactions(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let inventory = services.inventory().await;
    // The item must exist even though entries outlive deletion.
    if let Err(e) = inventory.item(id) {
        return errors::domain_error_to_response(e);
    }

    let entries = inventory.transactions_for_item(id);
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": entries.len(),
            "data": entries,
        })),
    )
        .into_response()
}
