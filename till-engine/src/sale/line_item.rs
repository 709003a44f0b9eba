//! Line item - one catalog item with a quantity

use shared::Money;
use shared::models::CatalogItem;
use shared::sale::SaleItemSummary;

/// One product entry in a sale.
///
/// Holds a frozen catalog snapshot and a quantity that is always at
/// least one; the owning `Sale` validates quantities before they reach
/// this type.
#[derive(Debug, Clone)]
pub struct LineItem {
    item: CatalogItem,
    quantity: i32,
}

impl LineItem {
    pub(super) fn new(item: CatalogItem, quantity: i32) -> Self {
        debug_assert!(quantity > 0);
        Self { item, quantity }
    }

    pub(super) fn increment(&mut self, quantity: i32) {
        debug_assert!(quantity > 0);
        self.quantity += quantity;
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Line price excluding VAT: unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.item.price.times(self.quantity)
    }

    /// VAT for the whole line: unit VAT × quantity.
    pub fn vat_amount(&self) -> Money {
        self.item.unit_vat().times(self.quantity)
    }

    /// Line price including VAT.
    pub fn total_with_vat(&self) -> Money {
        self.subtotal() + self.vat_amount()
    }

    /// Immutable view handed to collaborators.
    pub fn summarize(&self) -> SaleItemSummary {
        SaleItemSummary {
            item: self.item.clone(),
            quantity: self.quantity,
            subtotal: self.subtotal(),
            vat_amount: self.vat_amount(),
            total_with_vat: self.total_with_vat(),
        }
    }
}
