//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookup misses, stock shortfalls). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// An sku collided with one already held by a live item.
    #[error("SKU already exists: {0}")]
    DuplicateSku(String),

    /// A stock movement named an unknown transaction type.
    #[error("invalid transaction type: {0}")]
    InvalidTransactionType(String),

    /// A stock movement carried a non-positive quantity.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    /// A stock movement omitted its recipient.
    #[error("recipient is required")]
    MissingRecipient,

    /// An outgoing movement asked for more stock than is on hand.
    #[error("not enough quantity available: requested {requested}, have {available}")]
    InsufficientQuantity { requested: i64, available: i64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn duplicate_sku(sku: impl Into<String>) -> Self {
        Self::DuplicateSku(sku.into())
    }
}
