use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, IdSequence, ItemId};

use crate::status::StockStatus;

/// A stocked item.
///
/// `status` is derived from `quantity` and is recomputed by the store on
/// every mutation; callers never set it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub location: String,
    pub status: StockStatus,
}

/// Input for [`ItemStore::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub location: String,
}

/// Partial update for [`ItemStore::update`]; `None` fields keep their
/// previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub location: Option<String>,
}

impl ItemPatch {
    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}

/// Owned collection of inventory items, in insertion order.
///
/// Constructed once per process (or per test) and passed by handle; there is
/// no module-level shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<InventoryItem>,
    ids: IdSequence,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    /// Create a new item.
    ///
    /// Rejects blank sku/name/category and negative quantity, and an sku that
    /// collides with a currently stored item. Uniqueness is checked against
    /// live items only, so a deleted item's sku is reusable.
    pub fn create(&mut self, new: NewItem) -> DomainResult<InventoryItem> {
        if new.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU is required"));
        }
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if new.category.trim().is_empty() {
            return Err(DomainError::validation("category is required"));
        }
        if new.quantity < 0 {
            return Err(DomainError::validation(
                "quantity must be a non-negative integer",
            ));
        }
        if self.items.iter().any(|item| item.sku == new.sku) {
            return Err(DomainError::duplicate_sku(new.sku));
        }

        let item = InventoryItem {
            id: ItemId::new(self.ids.next()),
            status: StockStatus::classify(new.quantity),
            sku: new.sku,
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            location: new.location,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> DomainResult<&InventoryItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Apply a partial update, recomputing status when quantity changes.
    ///
    /// Does not re-check sku uniqueness against other items; see DESIGN.md.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) -> DomainResult<InventoryItem> {
        if let Some(quantity) = patch.quantity {
            if quantity < 0 {
                return Err(DomainError::validation(
                    "quantity must be a non-negative integer",
                ));
            }
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(DomainError::not_found)?;

        if let Some(sku) = patch.sku {
            item.sku = sku;
        }
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(location) = patch.location {
            item.location = location;
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
            item.status = StockStatus::classify(quantity);
        }

        Ok(item.clone())
    }

    /// Remove and return an item. Irreversible; ledger entries referencing it
    /// are left orphaned by design.
    pub fn delete(&mut self, id: ItemId) -> DomainResult<InventoryItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(DomainError::not_found)?;
        Ok(self.items.remove(index))
    }

    /// All items, in insertion order.
    pub fn list(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
