//! Standard completion handlers
//!
//! Adapters that plug the accounting and inventory services into the
//! completion notifier's handler extension point.

use super::accounting::AccountingService;
use super::inventory::InventoryService;
use crate::checkout::notifier::SaleCompletionHandler;
use shared::sale::SaleSummary;
use std::sync::Arc;

/// Replicates settled sales into the bookkeeping system.
pub struct AccountingHandler {
    accounting: Arc<dyn AccountingService>,
}

impl AccountingHandler {
    pub fn new(accounting: Arc<dyn AccountingService>) -> Self {
        Self { accounting }
    }
}

impl SaleCompletionHandler for AccountingHandler {
    fn name(&self) -> &str {
        "accounting"
    }

    fn handle(&self, sale: &SaleSummary) -> anyhow::Result<()> {
        self.accounting.record_sale(sale)?;
        self.accounting.update_statistics(sale.total_with_vat);
        Ok(())
    }
}

/// Adjusts stock for the sold lines.
pub struct InventoryHandler {
    inventory: Arc<dyn InventoryService>,
}

impl InventoryHandler {
    pub fn new(inventory: Arc<dyn InventoryService>) -> Self {
        Self { inventory }
    }
}

impl SaleCompletionHandler for InventoryHandler {
    fn name(&self) -> &str {
        "inventory"
    }

    fn handle(&self, sale: &SaleSummary) -> anyhow::Result<()> {
        // Partial failure is already logged per line and flagged for
        // reconciliation; it does not fail the handler.
        if !self.inventory.apply_sale(&sale.items) {
            tracing::warn!(sale_id = %sale.sale_id, "Stock adjustment incomplete");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::accounting::InMemoryAccounting;
    use crate::integration::inventory::InMemoryInventory;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use shared::Money;
    use shared::models::CatalogItem;
    use shared::sale::SaleItemSummary;

    fn make_summary() -> SaleSummary {
        let item = CatalogItem {
            item_id: "1".to_string(),
            name: "Kellogg's Cornflakes".to_string(),
            description: String::new(),
            price: Money::from_f64(10.0),
            vat_rate: Decimal::new(12, 2),
        };
        SaleSummary {
            sale_id: "sale-1".to_string(),
            items: vec![SaleItemSummary {
                item: item.clone(),
                quantity: 2,
                subtotal: Money::from_f64(20.0),
                vat_amount: Money::from_f64(2.4),
                total_with_vat: Money::from_f64(22.4),
            }],
            total: Money::from_f64(20.0),
            total_vat: Money::from_f64(2.4),
            discount: Money::zero(),
            total_with_vat: Money::from_f64(22.4),
            customer_id: None,
            opened_at: Utc::now(),
        }
    }

    #[test]
    fn test_accounting_handler_records_and_updates_statistics() {
        let accounting = Arc::new(InMemoryAccounting::new());
        let handler = AccountingHandler::new(accounting.clone());

        handler.handle(&make_summary()).unwrap();

        assert_eq!(accounting.recorded_sales(), 1);
        assert_eq!(accounting.total_revenue(), Money::from_f64(22.4));
    }

    #[test]
    fn test_inventory_handler_tolerates_partial_failure() {
        let inventory = Arc::new(InMemoryInventory::new());
        inventory.set_stock("1", 1);
        let handler = InventoryHandler::new(inventory.clone());

        // Requested 2 with only 1 in stock: logged, but the handler
        // itself reports success.
        assert!(handler.handle(&make_summary()).is_ok());
        assert_eq!(inventory.stock_level("1"), Some(1));
    }
}
