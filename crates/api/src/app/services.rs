use tokio::sync::{Mutex, MutexGuard};

use stockledger_inventory::Inventory;

/// Shared application state.
///
/// The whole inventory ledger sits behind one async mutex: every handler
/// takes the lock for its full read-check-write sequence, so concurrent
/// transactions against the same item cannot jointly overdraw it.
pub struct AppServices {
    inventory: Mutex<Inventory>,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            inventory: Mutex::new(Inventory::new()),
        }
    }

    pub async fn inventory(&self) -> MutexGuard<'_, Inventory> {
        self.inventory.lock().await
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
