//! Discount Rule Models
//!
//! Configuration entities consumed by the pricing engine. Rates are
//! fractions (0.10 = 10%). All rule kinds are additive: the engine sums
//! the amounts each rule produces, it never compounds them.

use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-customer discount rate (e.g. membership tier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDiscount {
    pub customer_id: String,
    /// Rate applied to the pre-discount sale total
    pub rate: Decimal,
}

/// Discount rate for a single catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDiscount {
    pub item_id: String,
    /// Rate applied to the line subtotal (excluding VAT)
    pub rate: Decimal,
}

/// Discount for a set of items bought together.
///
/// Qualifies when the sale's item-id set is a superset of
/// `required_items`; the rate then applies to the summed subtotals of
/// exactly the required items. Several bundles may qualify at once and
/// each applies independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleDiscount {
    pub name: String,
    pub required_items: BTreeSet<String>,
    pub rate: Decimal,
}

impl BundleDiscount {
    pub fn new<I, S>(name: &str, required_items: I, rate: Decimal) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            required_items: required_items.into_iter().map(Into::into).collect(),
            rate,
        }
    }
}

/// One step of the volume discount ladder.
///
/// A tier applies when the pre-discount total is strictly greater than
/// `threshold`. Only the highest applicable tier is used; tiers do not
/// accumulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeTier {
    pub threshold: Money,
    pub rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_constructor_collects_ids() {
        let bundle = BundleDiscount::new("breakfast", ["1", "3"], Decimal::new(15, 2));
        assert_eq!(bundle.required_items.len(), 2);
        assert!(bundle.required_items.contains("1"));
        assert!(bundle.required_items.contains("3"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let tier = VolumeTier {
            threshold: Money::from_f64(1000.0),
            rate: Decimal::new(3, 2),
        };
        let json = serde_json::to_string(&tier).unwrap();
        let back: VolumeTier = serde_json::from_str(&json).unwrap();
        assert_eq!(tier, back);
    }
}
