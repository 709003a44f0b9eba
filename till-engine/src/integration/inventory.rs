//! Stock adjustment contract and in-memory backend

use parking_lot::Mutex;
use shared::sale::SaleItemSummary;
use std::collections::HashMap;

/// Adjusts stock after a settled sale.
pub trait InventoryService: Send + Sync {
    /// Decrement stock for every sold line.
    ///
    /// Returns false when any line could not be applied. Successful
    /// decrements are not rolled back; the failed lines are logged for
    /// manual reconciliation.
    fn apply_sale(&self, items: &[SaleItemSummary]) -> bool;
}

/// In-memory stock ledger.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    stock: Mutex<HashMap<String, i64>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory with 50 units of every demo catalog item.
    pub fn with_test_stock() -> Self {
        let inventory = Self::new();
        {
            let mut stock = inventory.stock.lock();
            for item in super::catalog::test_catalog_items() {
                stock.insert(item.item_id, 50);
            }
        }
        inventory
    }

    pub fn set_stock(&self, item_id: &str, quantity: i64) {
        self.stock.lock().insert(item_id.to_string(), quantity);
    }

    pub fn stock_level(&self, item_id: &str) -> Option<i64> {
        self.stock.lock().get(item_id).copied()
    }
}

impl InventoryService for InMemoryInventory {
    fn apply_sale(&self, items: &[SaleItemSummary]) -> bool {
        let mut stock = self.stock.lock();
        let mut all_applied = true;

        for line in items {
            let item_id = &line.item.item_id;
            let quantity = i64::from(line.quantity);
            let available = stock.get(item_id).copied().unwrap_or(0);

            if available < quantity {
                all_applied = false;
                tracing::warn!(
                    item_id = %item_id,
                    requested = quantity,
                    available,
                    "Insufficient stock, decrement skipped"
                );
                continue;
            }

            stock.insert(item_id.clone(), available - quantity);
            tracing::debug!(item_id = %item_id, quantity, "Stock decremented");
        }

        if !all_applied {
            tracing::warn!("Some stock adjustments failed, manual reconciliation required");
        }
        all_applied
    }
}
