//! Discount service contract

use crate::pricing::DiscountEngine;
use shared::Money;
use shared::sale::{DiscountResult, SaleItemSummary};

/// Computes the discount for a sale.
///
/// Returns the full result including the component breakdown; callers
/// that only need the amount take `result.total`.
pub trait DiscountService: Send + Sync {
    fn compute_discount(
        &self,
        items: &[SaleItemSummary],
        pre_discount_total: Money,
        customer_id: &str,
    ) -> DiscountResult;
}

/// Discount service backed by the pricing engine.
pub struct RuleBasedDiscounts {
    engine: DiscountEngine,
}

impl RuleBasedDiscounts {
    pub fn new(engine: DiscountEngine) -> Self {
        Self { engine }
    }
}

impl DiscountService for RuleBasedDiscounts {
    fn compute_discount(
        &self,
        items: &[SaleItemSummary],
        pre_discount_total: Money,
        customer_id: &str,
    ) -> DiscountResult {
        self.engine.evaluate(items, pre_discount_total, customer_id)
    }
}
