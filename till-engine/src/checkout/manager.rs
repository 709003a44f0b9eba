//! CheckoutManager - till-facing facade
//!
//! Coordinates one sale at a time against the injected collaborators:
//! catalog lookups while items are registered, the discount service when
//! a customer asks for a discount, and the completion notifier once
//! payment settles. Owns no business rules of its own - those live in
//! the `Sale` aggregate and the pricing engine.

use super::notifier::CompletionNotifier;
use crate::integration::catalog::{Catalog, CatalogError};
use crate::integration::discount::DiscountService;
use crate::sale::{ItemRegistration, Sale, SaleError};
use serde::{Deserialize, Serialize};
use shared::Money;
use shared::sale::{DiscountResult, Receipt, SaleSummary};
use std::sync::Arc;
use thiserror::Error;

/// Checkout errors
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No sale has been started, or the last one was already paid.
    #[error("no active sale")]
    NoActiveSale,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Sale(#[from] SaleError),
}

/// Outcome of a settled payment, for the cashier display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub tendered: Money,
    /// Negative when the customer underpaid
    pub change: Money,
    pub receipt: Receipt,
}

/// One till. Mutated by a single logical caller at a time.
pub struct CheckoutManager {
    catalog: Arc<dyn Catalog>,
    discounts: Arc<dyn DiscountService>,
    notifier: CompletionNotifier,
    current: Option<Sale>,
}

impl CheckoutManager {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        discounts: Arc<dyn DiscountService>,
        notifier: CompletionNotifier,
    ) -> Self {
        Self {
            catalog,
            discounts,
            notifier,
            current: None,
        }
    }

    /// Start a new sale, discarding any unsettled one.
    pub fn start_sale(&mut self) -> &str {
        if let Some(old) = &self.current {
            tracing::warn!(sale_id = %old.sale_id(), "Discarding unsettled sale");
        }
        let sale = Sale::new();
        tracing::info!(sale_id = %sale.sale_id(), "Sale started");
        self.current.insert(sale).sale_id()
    }

    pub fn is_sale_active(&self) -> bool {
        self.current.is_some()
    }

    /// Look up an item in the catalog and add it to the current sale.
    ///
    /// Returns the registration echo with running totals. Lookup
    /// failures keep their kind (`ItemNotFound` vs `Unavailable`) so the
    /// till can tell "no such item" from "try again later".
    pub fn register_item(
        &mut self,
        item_id: &str,
        quantity: i32,
    ) -> Result<ItemRegistration, CheckoutError> {
        let sale = self.current.as_mut().ok_or(CheckoutError::NoActiveSale)?;
        let item = self.catalog.find_item(item_id)?;
        let registration = sale.add_item(item, quantity)?;
        tracing::debug!(
            sale_id = %sale.sale_id(),
            item_id = %item_id,
            quantity,
            merged = registration.merged,
            running_total = %registration.running_total,
            "Item registered"
        );
        Ok(registration)
    }

    /// Ask the discount service for this customer's discount and apply
    /// it to the current sale. Replaces any earlier discount.
    pub fn request_discount(&mut self, customer_id: &str) -> Result<DiscountResult, CheckoutError> {
        let sale = self.current.as_mut().ok_or(CheckoutError::NoActiveSale)?;

        // The pipeline sees the pre-discount total, independent of any
        // discount applied earlier (last write wins).
        let pre_discount_total = sale.total() + sale.total_vat();
        let summary = sale.summary();
        let result = self
            .discounts
            .compute_discount(&summary.items, pre_discount_total, customer_id);
        sale.apply_discount(customer_id, result.total)?;

        tracing::info!(
            sale_id = %sale.sale_id(),
            customer_id = %customer_id,
            discount = %result.total,
            components = result.breakdown.len(),
            "Discount applied"
        );
        Ok(result)
    }

    /// Freeze the current sale's totals for the cashier display.
    pub fn end_sale(&self) -> Result<SaleSummary, CheckoutError> {
        let sale = self.current.as_ref().ok_or(CheckoutError::NoActiveSale)?;
        Ok(sale.summary())
    }

    /// The running state of the current sale, if any.
    pub fn current_summary(&self) -> Option<SaleSummary> {
        self.current.as_ref().map(Sale::summary)
    }

    /// Settle the current sale with tendered cash and fan out the
    /// completion sequence. The sale is consumed; the till is ready for
    /// `start_sale` again afterwards.
    pub fn pay(&mut self, tendered: Money) -> Result<PaymentOutcome, CheckoutError> {
        let mut sale = self.current.take().ok_or(CheckoutError::NoActiveSale)?;

        let (payment, receipt) = match sale.settle_payment(tendered) {
            Ok(settled) => settled,
            Err(e) => {
                self.current = Some(sale);
                return Err(e.into());
            }
        };

        let summary = sale.summary();
        self.notifier.sale_completed(&summary, &receipt);

        Ok(PaymentOutcome {
            tendered: payment.tendered,
            change: payment.change,
            receipt,
        })
    }

    /// The completion notifier, for till ledger inspection.
    pub fn notifier(&self) -> &CompletionNotifier {
        &self.notifier
    }
}
