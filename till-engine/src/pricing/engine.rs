//! Discount Engine
//!
//! Holds the configured discount rules and evaluates them against a
//! sale. Evaluation is a pure function of (line items, pre-discount
//! total, customer id); the engine carries no per-sale state.

use super::calculator::{bundle_components, customer_component, item_components, volume_component};
use rust_decimal::Decimal;
use shared::Money;
use shared::models::{BundleDiscount, CustomerDiscount, ItemDiscount, VolumeTier};
use shared::sale::{DiscountResult, SaleItemSummary};
use std::collections::HashMap;

/// Discount engine - evaluates the configured rules for one sale.
#[derive(Debug, Clone, Default)]
pub struct DiscountEngine {
    customers: HashMap<String, Decimal>,
    item_rates: HashMap<String, Decimal>,
    bundles: Vec<BundleDiscount>,
    /// Sorted by descending threshold so the first match is the highest
    /// applicable tier
    volume_tiers: Vec<VolumeTier>,
}

impl DiscountEngine {
    pub fn new(
        customers: Vec<CustomerDiscount>,
        item_rates: Vec<ItemDiscount>,
        bundles: Vec<BundleDiscount>,
        mut volume_tiers: Vec<VolumeTier>,
    ) -> Self {
        volume_tiers.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Self {
            customers: customers
                .into_iter()
                .map(|c| (c.customer_id, c.rate))
                .collect(),
            item_rates: item_rates.into_iter().map(|i| (i.item_id, i.rate)).collect(),
            bundles,
            volume_tiers,
        }
    }

    /// Engine seeded with the demo rule set: two customer tiers, the
    /// standard volume ladder, one item rate and one bundle matching the
    /// demo catalog.
    pub fn with_demo_rules() -> Self {
        Self::new(
            vec![
                CustomerDiscount {
                    customer_id: "1001".to_string(),
                    rate: Decimal::new(10, 2),
                },
                CustomerDiscount {
                    customer_id: "1002".to_string(),
                    rate: Decimal::new(5, 2),
                },
            ],
            vec![ItemDiscount {
                item_id: "5".to_string(),
                rate: Decimal::new(5, 2),
            }],
            vec![BundleDiscount::new("breakfast", ["1", "3"], Decimal::new(10, 2))],
            standard_volume_tiers(),
        )
    }

    /// Run the pipeline: customer, volume, item and bundle components,
    /// summed additively. The breakdown is returned for audit and
    /// logging; callers typically store only the total on the sale.
    pub fn evaluate(
        &self,
        items: &[SaleItemSummary],
        pre_discount_total: Money,
        customer_id: &str,
    ) -> DiscountResult {
        let mut breakdown = Vec::new();

        breakdown.extend(customer_component(&self.customers, customer_id, pre_discount_total));
        breakdown.extend(volume_component(&self.volume_tiers, pre_discount_total));
        breakdown.extend(item_components(&self.item_rates, items));
        breakdown.extend(bundle_components(&self.bundles, items));

        let result = DiscountResult::from_components(breakdown);

        for component in &result.breakdown {
            tracing::debug!(
                kind = ?component.kind,
                source = %component.source,
                rate = %component.rate,
                amount = %component.amount,
                "Discount component applied"
            );
        }
        tracing::debug!(
            customer_id = %customer_id,
            pre_discount_total = %pre_discount_total,
            discount = %result.total,
            "Discount evaluated"
        );

        result
    }
}

/// The standard volume ladder: strictly over 1000 gives 3%, strictly
/// over 500 gives 2%.
pub fn standard_volume_tiers() -> Vec<VolumeTier> {
    vec![
        VolumeTier {
            threshold: Money::from_f64(1000.0),
            rate: Decimal::new(3, 2),
        },
        VolumeTier {
            threshold: Money::from_f64(500.0),
            rate: Decimal::new(2, 2),
        },
    ]
}
