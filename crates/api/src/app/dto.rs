use chrono::NaiveDate;
use serde::Deserialize;

use stockledger_inventory::{ItemFilter, ItemPatch, NewItem, StockMovement};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub sku: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub location: String,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            sku: req.sku,
            name: req.name,
            category: req.category,
            quantity: req.quantity,
            location: req.location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub location: Option<String>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            sku: req.sku,
            name: req.name,
            category: req.category,
            quantity: req.quantity,
            location: req.location,
        }
    }
}

/// Body of `POST /inventory/:id/transaction`.
///
/// `type` stays a raw string; the ledger parses it itself so the unknown-item
/// check runs first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: i64,
    #[serde(default)]
    pub recipient: String,
    pub purpose: Option<String>,
    pub return_date: Option<NaiveDate>,
}

impl From<TransactionRequest> for StockMovement {
    fn from(req: TransactionRequest) -> Self {
        Self {
            kind: req.kind,
            quantity: req.quantity,
            recipient: req.recipient,
            purpose: req.purpose,
            return_date: req.return_date,
        }
    }
}

/// Query string of `GET /inventory`.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

impl ListItemsQuery {
    pub fn filter(&self) -> ItemFilter {
        ItemFilter {
            search: self.search.clone(),
            category: self.category.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[allow(dead_code)] // mock auth never inspects the password
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[allow(dead_code)]
    pub password: Option<String>,
}
