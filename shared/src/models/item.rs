//! Catalog Item Model

use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An item as described by the catalog.
///
/// This is a snapshot: once embedded in a sale line it never changes,
/// even if the catalog is updated mid-sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item identifier used at the till (scanned or keyed in)
    pub item_id: String,
    /// Display name shown on the till and on the receipt
    pub name: String,
    /// Longer description for the cashier display
    pub description: String,
    /// Unit price excluding VAT
    pub price: Money,
    /// VAT rate as a fraction (0.12 = 12%)
    pub vat_rate: Decimal,
}

impl CatalogItem {
    /// VAT amount for a single unit.
    pub fn unit_vat(&self) -> Money {
        self.price.multiply(self.vat_rate)
    }

    /// Unit price including VAT.
    pub fn price_with_vat(&self) -> Money {
        self.price + self.unit_vat()
    }
}
