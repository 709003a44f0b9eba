//! Sale summary and payment record types

use crate::models::CatalogItem;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sale line as seen by downstream collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItemSummary {
    /// Catalog data frozen at the time the item was added
    pub item: CatalogItem,
    pub quantity: i32,
    /// Line price excluding VAT (unit price × quantity)
    pub subtotal: Money,
    /// VAT for the whole line
    pub vat_amount: Money,
    /// Line price including VAT
    pub total_with_vat: Money,
}

/// Snapshot of a sale's content and totals.
///
/// Handed to completion handlers (accounting, inventory) after
/// settlement; also used as the running-state view while the sale is
/// still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleSummary {
    pub sale_id: String,
    pub items: Vec<SaleItemSummary>,
    /// Sum of line subtotals, excluding VAT
    pub total: Money,
    /// Sum of line VAT amounts
    pub total_vat: Money,
    /// Discount applied to the sale (zero if none)
    pub discount: Money,
    /// total + total_vat − discount
    pub total_with_vat: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// When the sale was started
    pub opened_at: DateTime<Utc>,
}

/// Record of a settled cash payment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Amount handed over by the customer
    pub tendered: Money,
    /// tendered − amount due; negative when the customer underpaid
    pub change: Money,
    pub settled_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// The amount actually kept by the till.
    pub fn amount_paid(&self) -> Money {
        self.tendered - self.change
    }
}
