use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, IdSequence, ItemId, TransactionId};

use crate::item::{InventoryItem, ItemPatch, ItemStore, NewItem};
use crate::query::{filter_items, ItemFilter};

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Stock leaves with an expected return.
    Lend,
    /// Stock leaves permanently.
    Give,
    /// Stock arrives (e.g. supplier delivery).
    Receive,
    /// Stock arrives (manual addition).
    Add,
}

impl TransactionKind {
    /// Movements that reduce on-hand quantity.
    pub fn is_outgoing(&self) -> bool {
        matches!(self, Self::Lend | Self::Give)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lend => "lend",
            Self::Give => "give",
            Self::Receive => "receive",
            Self::Add => "add",
        }
    }
}

impl core::str::FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lend" => Ok(Self::Lend),
            "give" => Ok(Self::Give),
            "receive" => Ok(Self::Receive),
            "add" => Ok(Self::Add),
            other => Err(DomainError::InvalidTransactionType(other.to_string())),
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An applied stock movement. Immutable once appended: entries are never
/// edited or deleted, and deleting the item leaves them orphaned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub item_id: ItemId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: i64,
    pub recipient: String,
    pub purpose: String,
    /// Present only for Lend. Nothing in the ledger reconciles a passed
    /// return date; expiry is a caller concern.
    pub return_date: Option<NaiveDate>,
    /// Whether lent stock has come back. Always created `false`; no
    /// operation currently transitions it (unsupported, see DESIGN.md).
    pub returned: bool,
    pub occurred_at: DateTime<Utc>,
}

/// A requested stock movement, as received from the caller.
///
/// `kind` stays a raw string here so the ledger can do its own validation in
/// the documented order (unknown item wins over unknown type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockMovement {
    pub kind: String,
    pub quantity: i64,
    pub recipient: String,
    pub purpose: Option<String>,
    pub return_date: Option<NaiveDate>,
}

/// Result of a successful movement: the updated item and the appended entry,
/// as one consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedMovement {
    pub item: InventoryItem,
    pub transaction: Transaction,
}

/// Append-only log of stock movements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLedger {
    entries: Vec<Transaction>,
    ids: IdSequence,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    /// Validate and apply a movement against the store.
    ///
    /// Checks run in order, first failure wins, and a failure leaves both the
    /// store and the ledger untouched:
    /// 1. the item exists;
    /// 2. the kind names a known transaction type;
    /// 3. the quantity is at least 1;
    /// 4. the recipient is non-blank;
    /// 5. for outgoing kinds, on-hand quantity covers the request.
    ///
    /// A Lend without a return date is accepted; return-date enforcement is
    /// left to the client form (see DESIGN.md).
    pub fn apply(
        &mut self,
        store: &mut ItemStore,
        item_id: ItemId,
        movement: StockMovement,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<AppliedMovement> {
        let current = store.get(item_id)?.quantity;

        let kind: TransactionKind = movement.kind.parse()?;

        if movement.quantity < 1 {
            return Err(DomainError::InvalidQuantity(movement.quantity));
        }
        if movement.recipient.trim().is_empty() {
            return Err(DomainError::MissingRecipient);
        }
        if kind.is_outgoing() && current < movement.quantity {
            return Err(DomainError::InsufficientQuantity {
                requested: movement.quantity,
                available: current,
            });
        }

        let new_quantity = if kind.is_outgoing() {
            current - movement.quantity
        } else {
            current + movement.quantity
        };

        // Route the mutation through the store so status is re-derived there.
        let item = store.update(item_id, ItemPatch::quantity(new_quantity))?;

        let transaction = Transaction {
            id: TransactionId::new(self.ids.next()),
            item_id,
            kind,
            quantity: movement.quantity,
            recipient: movement.recipient,
            purpose: movement.purpose.unwrap_or_default(),
            return_date: match kind {
                TransactionKind::Lend => movement.return_date,
                _ => None,
            },
            returned: false,
            occurred_at,
        };
        self.entries.push(transaction.clone());

        Ok(AppliedMovement { item, transaction })
    }

    /// All entries, in append order.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Entries affecting one item, in append order.
    pub fn entries_for_item(&self, item_id: ItemId) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|t| t.item_id == item_id)
            .collect()
    }
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// The inventory ledger as one unit: item store plus transaction ledger.
///
/// Every operation takes `&mut self`, so putting an `Inventory` behind a
/// single lock makes the check-then-mutate sequence in [`TransactionLedger::apply`]
/// atomic with respect to concurrent callers (no lost-update overdraw).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    store: ItemStore,
    ledger: TransactionLedger,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(),
            ledger: TransactionLedger::new(),
        }
    }

    pub fn create_item(&mut self, new: NewItem) -> DomainResult<InventoryItem> {
        self.store.create(new)
    }

    pub fn item(&self, id: ItemId) -> DomainResult<&InventoryItem> {
        self.store.get(id)
    }

    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> DomainResult<InventoryItem> {
        self.store.update(id, patch)
    }

    pub fn delete_item(&mut self, id: ItemId) -> DomainResult<InventoryItem> {
        self.store.delete(id)
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.store.list()
    }

    /// Filtered view over the items, in insertion order.
    pub fn items_matching(&self, filter: &ItemFilter) -> Vec<&InventoryItem> {
        filter_items(self.store.list(), filter)
    }

    pub fn apply_movement(
        &mut self,
        item_id: ItemId,
        movement: StockMovement,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<AppliedMovement> {
        self.ledger
            .apply(&mut self.store, item_id, movement, occurred_at)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.entries()
    }

    pub fn transactions_for_item(&self, item_id: ItemId) -> Vec<&Transaction> {
        self.ledger.entries_for_item(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StockStatus;
    use std::sync::{Arc, Mutex};

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn movement(kind: &str, quantity: i64, recipient: &str) -> StockMovement {
        StockMovement {
            kind: kind.to_string(),
            quantity,
            recipient: recipient.to_string(),
            purpose: None,
            return_date: None,
        }
    }

    fn seeded(sku: &str, quantity: i64) -> (Inventory, ItemId) {
        let mut inv = Inventory::new();
        let item = inv
            .create_item(NewItem {
                sku: sku.to_string(),
                name: format!("Item {sku}"),
                category: "Electronics".to_string(),
                quantity,
                location: "Warehouse A".to_string(),
            })
            .unwrap();
        (inv, item.id)
    }

    #[test]
    fn give_reduces_quantity_and_records_transaction() {
        let (mut inv, id) = seeded("SKU001", 10);

        let applied = inv
            .apply_movement(id, movement("give", 5, "Bob"), test_time())
            .unwrap();

        assert_eq!(applied.item.quantity, 5);
        assert_eq!(applied.item.status, StockStatus::InStock);
        assert_eq!(applied.transaction.id, TransactionId::new(1));
        assert_eq!(applied.transaction.item_id, id);
        assert_eq!(applied.transaction.kind, TransactionKind::Give);
        assert_eq!(applied.transaction.quantity, 5);
        assert_eq!(applied.transaction.recipient, "Bob");
        assert_eq!(applied.transaction.purpose, "");
        assert_eq!(applied.transaction.return_date, None);
        assert!(!applied.transaction.returned);

        // The returned snapshot matches the store.
        assert_eq!(inv.item(id).unwrap(), &applied.item);
    }

    #[test]
    fn overdraw_fails_and_leaves_state_untouched() {
        let (mut inv, id) = seeded("SKU001", 10);

        let err = inv
            .apply_movement(id, movement("give", 999, "Bob"), test_time())
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::InsufficientQuantity {
                requested: 999,
                available: 10,
            }
        );
        assert_eq!(inv.item(id).unwrap().quantity, 10);
        assert!(inv.transactions().is_empty());
    }

    #[test]
    fn receive_increases_quantity_and_reclassifies() {
        let (mut inv, id) = seeded("SKU001", 0);
        assert_eq!(inv.item(id).unwrap().status, StockStatus::OutOfStock);

        let applied = inv
            .apply_movement(id, movement("receive", 3, "Supplier"), test_time())
            .unwrap();

        assert_eq!(applied.item.quantity, 3);
        assert_eq!(applied.item.status, StockStatus::LowStock);
    }

    #[test]
    fn incoming_kinds_ignore_on_hand_shortfall() {
        let (mut inv, id) = seeded("SKU001", 0);
        // "add" on an empty item is fine; sufficiency only guards outgoing kinds.
        let applied = inv
            .apply_movement(id, movement("add", 100, "Restock"), test_time())
            .unwrap();
        assert_eq!(applied.item.quantity, 100);
        assert_eq!(applied.item.status, StockStatus::InStock);
    }

    #[test]
    fn lend_keeps_return_date_other_kinds_drop_it() {
        let (mut inv, id) = seeded("SKU001", 10);
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

        let mut lend = movement("lend", 2, "Alice");
        lend.return_date = Some(date);
        let applied = inv.apply_movement(id, lend, test_time()).unwrap();
        assert_eq!(applied.transaction.return_date, Some(date));

        let mut give = movement("give", 1, "Alice");
        give.return_date = Some(date);
        let applied = inv.apply_movement(id, give, test_time()).unwrap();
        assert_eq!(applied.transaction.return_date, None);
    }

    #[test]
    fn lend_without_return_date_is_accepted() {
        let (mut inv, id) = seeded("SKU001", 10);
        let applied = inv
            .apply_movement(id, movement("lend", 2, "Alice"), test_time())
            .unwrap();
        assert_eq!(applied.transaction.return_date, None);
        assert_eq!(applied.item.quantity, 8);
    }

    #[test]
    fn validation_order_unknown_item_beats_unknown_kind() {
        let (mut inv, _) = seeded("SKU001", 10);
        let err = inv
            .apply_movement(ItemId::new(99), movement("teleport", 1, "Bob"), test_time())
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn unknown_kind_beats_bad_quantity() {
        let (mut inv, id) = seeded("SKU001", 10);
        let err = inv
            .apply_movement(id, movement("teleport", 0, "Bob"), test_time())
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransactionType("teleport".to_string())
        );
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let (mut inv, id) = seeded("SKU001", 10);
        for q in [0, -5] {
            let err = inv
                .apply_movement(id, movement("give", q, "Bob"), test_time())
                .unwrap_err();
            assert_eq!(err, DomainError::InvalidQuantity(q));
        }
    }

    #[test]
    fn blank_recipient_is_rejected() {
        let (mut inv, id) = seeded("SKU001", 10);
        let err = inv
            .apply_movement(id, movement("give", 1, "   "), test_time())
            .unwrap_err();
        assert_eq!(err, DomainError::MissingRecipient);
    }

    #[test]
    fn ledger_ids_are_monotonic_across_items() {
        let (mut inv, a) = seeded("SKU001", 10);
        let b = inv
            .create_item(NewItem {
                sku: "SKU002".to_string(),
                name: "Second".to_string(),
                category: "Furniture".to_string(),
                quantity: 10,
                location: String::new(),
            })
            .unwrap()
            .id;

        let t1 = inv
            .apply_movement(a, movement("give", 1, "Bob"), test_time())
            .unwrap();
        let t2 = inv
            .apply_movement(b, movement("give", 1, "Bob"), test_time())
            .unwrap();
        let t3 = inv
            .apply_movement(a, movement("receive", 1, "Supplier"), test_time())
            .unwrap();

        assert_eq!(t1.transaction.id, TransactionId::new(1));
        assert_eq!(t2.transaction.id, TransactionId::new(2));
        assert_eq!(t3.transaction.id, TransactionId::new(3));

        let for_a = inv.transactions_for_item(a);
        assert_eq!(for_a.len(), 2);
        assert!(for_a.iter().all(|t| t.item_id == a));
    }

    #[test]
    fn deleting_an_item_orphans_its_ledger_entries() {
        let (mut inv, id) = seeded("SKU001", 10);
        inv.apply_movement(id, movement("give", 1, "Bob"), test_time())
            .unwrap();
        inv.delete_item(id).unwrap();

        assert_eq!(inv.transactions().len(), 1);
        assert_eq!(inv.transactions()[0].item_id, id);
        // And further movements against the dead id miss.
        let err = inv
            .apply_movement(id, movement("give", 1, "Bob"), test_time())
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn transaction_serializes_with_api_field_names() {
        let (mut inv, id) = seeded("SKU001", 10);
        let applied = inv
            .apply_movement(id, movement("give", 5, "Bob"), test_time())
            .unwrap();

        let json = serde_json::to_value(&applied.transaction).unwrap();
        assert_eq!(json["itemId"], serde_json::json!(1));
        assert_eq!(json["type"], serde_json::json!("give"));
        assert_eq!(json["returnDate"], serde_json::Value::Null);
        assert_eq!(json["returned"], serde_json::json!(false));
    }

    #[test]
    fn concurrent_overdraw_attempts_cannot_both_succeed() {
        let (inv, id) = seeded("SKU001", 10);
        let inv = Arc::new(Mutex::new(inv));

        // Two movements of 7 against 10 on hand: at most one may apply.
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let inv = Arc::clone(&inv);
                std::thread::spawn(move || {
                    let mut guard = inv.lock().unwrap();
                    guard
                        .apply_movement(id, movement("give", 7, "Bob"), test_time())
                        .is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        let guard = inv.lock().unwrap();
        assert_eq!(guard.item(id).unwrap().quantity, 3);
        assert_eq!(guard.transactions().len(), 1);
    }
}
