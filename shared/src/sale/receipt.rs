//! Receipt - settlement-time snapshot of a sale

use super::types::{PaymentRecord, SaleItemSummary};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proof of a settled sale.
///
/// Captured at settlement time as a copy, not a live view: later reads
/// can never observe further mutation of the sale that produced it.
/// Rendering to printable text is done by the engine's printing module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<SaleItemSummary>,
    /// Total excluding VAT
    pub total: Money,
    pub total_vat: Money,
    /// Discount applied to the sale (zero if none)
    pub discount: Money,
    /// Final amount due: total + total_vat − discount
    pub total_with_vat: Money,
    pub payment: PaymentRecord,
    /// When the sale was started
    pub sale_time: DateTime<Utc>,
}

impl Receipt {
    /// Whether a discount line should appear on the printed receipt.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}
