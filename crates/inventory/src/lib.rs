//! Inventory domain module.
//!
//! This crate contains business rules for inventory, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).
//!
//! - `status`: quantity → stock-status classification
//! - `item`: the item store (create/read/update/delete over owned records)
//! - `ledger`: the append-only stock-movement ledger and the `Inventory`
//!   facade that couples it to the store
//! - `query`: filtered/paginated read views for presentation

pub mod item;
pub mod ledger;
pub mod query;
pub mod status;

pub use item::{InventoryItem, ItemPatch, ItemStore, NewItem};
pub use ledger::{
    AppliedMovement, Inventory, StockMovement, Transaction, TransactionKind, TransactionLedger,
};
pub use query::{filter_items, paginate, ItemFilter};
pub use status::{StockStatus, LOW_STOCK_THRESHOLD};
