use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockledger_core::DomainError;

/// Map a domain error to the JSON envelope: 404 for lookup misses, 400 for
/// every other caller-input failure.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match err {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Validation(_)
        | DomainError::InvalidId(_)
        | DomainError::DuplicateSku(_)
        | DomainError::InvalidTransactionType(_)
        | DomainError::InvalidQuantity(_)
        | DomainError::MissingRecipient
        | DomainError::InsufficientQuantity { .. } => StatusCode::BAD_REQUEST,
    };

    let message = match &err {
        DomainError::NotFound => "Item not found".to_string(),
        DomainError::InsufficientQuantity { .. } => "Not enough quantity available".to_string(),
        other => other.to_string(),
    };

    json_error(status, message)
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}
