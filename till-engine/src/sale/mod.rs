//! Sale aggregate
//!
//! A `Sale` moves through two states: **Open** (accepting items and
//! discounts) and **Settled** (payment recorded, receipt snapshotted).
//! There is no abandoned state; an open sale that is never settled is
//! simply dropped by the caller.
//!
//! All mutation goes through the methods here. Line items are never
//! handed out mutably, so the totals can be recomputed from them at any
//! time while the sale is open.

mod line_item;
mod settlement;

#[cfg(test)]
mod tests;

pub use line_item::LineItem;
pub use settlement::CashPayment;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Money;
use shared::models::CatalogItem;
use shared::sale::{PaymentRecord, Receipt, SaleSummary};
use thiserror::Error;

/// Sale errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleError {
    /// Quantity must be at least one.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i32),

    /// The sale has been settled; no further mutation is allowed.
    #[error("sale {0} is already settled")]
    AlreadySettled(String),
}

/// Echo returned after registering an item, so the till can show the
/// scanned item together with the running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRegistration {
    pub item: CatalogItem,
    /// Running total including VAT and any applied discount
    pub running_total: Money,
    /// Running VAT
    pub running_vat: Money,
    /// True when the item id was already in the sale and the existing
    /// line was incremented instead of a new one appended
    pub merged: bool,
}

struct SettledState {
    payment: PaymentRecord,
    receipt: Receipt,
}

/// A single sale transaction.
pub struct Sale {
    sale_id: String,
    items: Vec<LineItem>,
    opened_at: DateTime<Utc>,
    customer_id: Option<String>,
    discount: Money,
    settlement: Option<SettledState>,
}

impl Sale {
    /// Start a new, empty sale.
    pub fn new() -> Self {
        Self {
            sale_id: uuid::Uuid::new_v4().to_string(),
            items: Vec::new(),
            opened_at: Utc::now(),
            customer_id: None,
            discount: Money::zero(),
            settlement: None,
        }
    }

    pub fn sale_id(&self) -> &str {
        &self.sale_id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn discount_amount(&self) -> Money {
        self.discount
    }

    pub fn is_settled(&self) -> bool {
        self.settlement.is_some()
    }

    /// The receipt snapshot, present once the sale is settled.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.settlement.as_ref().map(|s| &s.receipt)
    }

    /// The payment record, present once the sale is settled.
    pub fn payment(&self) -> Option<&PaymentRecord> {
        self.settlement.as_ref().map(|s| &s.payment)
    }

    fn ensure_open(&self) -> Result<(), SaleError> {
        if self.settlement.is_some() {
            return Err(SaleError::AlreadySettled(self.sale_id.clone()));
        }
        Ok(())
    }

    /// Add an item to the sale.
    ///
    /// A repeated item id increments the existing line instead of
    /// appending a new one; insertion order is preserved either way.
    pub fn add_item(
        &mut self,
        item: CatalogItem,
        quantity: i32,
    ) -> Result<ItemRegistration, SaleError> {
        self.ensure_open()?;
        if quantity <= 0 {
            return Err(SaleError::InvalidQuantity(quantity));
        }

        let merged = match self.items.iter_mut().find(|l| l.item().item_id == item.item_id) {
            Some(line) => {
                line.increment(quantity);
                true
            }
            None => {
                self.items.push(LineItem::new(item.clone(), quantity));
                false
            }
        };

        Ok(ItemRegistration {
            item,
            running_total: self.total_with_vat(),
            running_vat: self.total_vat(),
            merged,
        })
    }

    /// Apply a discount for the given customer.
    ///
    /// A second call replaces the earlier discount; amounts never
    /// accumulate.
    pub fn apply_discount(&mut self, customer_id: &str, amount: Money) -> Result<(), SaleError> {
        self.ensure_open()?;
        self.customer_id = Some(customer_id.to_string());
        self.discount = amount;
        Ok(())
    }

    /// Total price excluding VAT.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Total VAT.
    pub fn total_vat(&self) -> Money {
        self.items.iter().map(LineItem::vat_amount).sum()
    }

    /// Total including VAT, after discount.
    ///
    /// May be negative when the applied discount exceeds the
    /// pre-discount total; the engine records what it is told.
    pub fn total_with_vat(&self) -> Money {
        self.total() + self.total_vat() - self.discount
    }

    /// Settle the sale with the tendered cash amount.
    ///
    /// Change is tendered minus the amount due and may be negative;
    /// rejecting underpayment is the caller's policy, not the engine's.
    /// Transitions the sale to Settled and freezes a receipt snapshot.
    pub fn settle_payment(&mut self, tendered: Money) -> Result<(PaymentRecord, Receipt), SaleError> {
        self.ensure_open()?;

        let payment = CashPayment::new(tendered).into_record(self.total_with_vat());
        let receipt = Receipt {
            items: self.items.iter().map(LineItem::summarize).collect(),
            total: self.total(),
            total_vat: self.total_vat(),
            discount: self.discount,
            total_with_vat: self.total_with_vat(),
            payment: payment.clone(),
            sale_time: self.opened_at,
        };

        self.settlement = Some(SettledState {
            payment: payment.clone(),
            receipt: receipt.clone(),
        });

        tracing::info!(
            sale_id = %self.sale_id,
            total = %receipt.total_with_vat,
            tendered = %payment.tendered,
            change = %payment.change,
            "Sale settled"
        );

        Ok((payment, receipt))
    }

    /// Snapshot of the sale's content and totals.
    pub fn summary(&self) -> SaleSummary {
        SaleSummary {
            sale_id: self.sale_id.clone(),
            items: self.items.iter().map(LineItem::summarize).collect(),
            total: self.total(),
            total_vat: self.total_vat(),
            discount: self.discount,
            total_with_vat: self.total_with_vat(),
            customer_id: self.customer_id.clone(),
            opened_at: self.opened_at,
        }
    }
}

impl Default for Sale {
    fn default() -> Self {
        Self::new()
    }
}
