//! Discount component calculators
//!
//! Each function computes one additive component of the pipeline and
//! returns the applied-discount trace entries for it. Customer and
//! volume components are based on the pre-discount sale total; item and
//! bundle components are based on line subtotals excluding VAT.

use rust_decimal::Decimal;
use shared::Money;
use shared::models::{BundleDiscount, VolumeTier};
use shared::sale::{AppliedDiscount, DiscountKind, SaleItemSummary};
use std::collections::{BTreeSet, HashMap};

/// Customer-tier component: pre-discount total × the customer's rate,
/// or nothing for an unknown customer.
pub fn customer_component(
    customers: &HashMap<String, Decimal>,
    customer_id: &str,
    pre_discount_total: Money,
) -> Option<AppliedDiscount> {
    customers.get(customer_id).map(|rate| AppliedDiscount {
        kind: DiscountKind::Customer,
        source: customer_id.to_string(),
        rate: *rate,
        amount: pre_discount_total.multiply(*rate),
    })
}

/// Volume component: the highest tier whose threshold the pre-discount
/// total strictly exceeds. A step function - tiers never accumulate.
///
/// `tiers` must be sorted by descending threshold.
pub fn volume_component(tiers: &[VolumeTier], pre_discount_total: Money) -> Option<AppliedDiscount> {
    tiers
        .iter()
        .find(|tier| pre_discount_total > tier.threshold)
        .map(|tier| AppliedDiscount {
            kind: DiscountKind::Volume,
            source: format!("over {}", tier.threshold),
            rate: tier.rate,
            amount: pre_discount_total.multiply(tier.rate),
        })
}

/// Per-item components: one entry per line whose item id has a
/// configured rate, each computed on that line's subtotal.
pub fn item_components(
    item_rates: &HashMap<String, Decimal>,
    items: &[SaleItemSummary],
) -> Vec<AppliedDiscount> {
    items
        .iter()
        .filter_map(|line| {
            item_rates.get(&line.item.item_id).map(|rate| AppliedDiscount {
                kind: DiscountKind::Item,
                source: line.item.item_id.clone(),
                rate: *rate,
                amount: line.subtotal.multiply(*rate),
            })
        })
        .collect()
}

/// Bundle components: every configured bundle whose required item-id set
/// is covered by the sale contributes rate × the summed subtotals of
/// exactly its member items. Qualifying bundles apply independently.
pub fn bundle_components(
    bundles: &[BundleDiscount],
    items: &[SaleItemSummary],
) -> Vec<AppliedDiscount> {
    let present: BTreeSet<&str> = items.iter().map(|line| line.item.item_id.as_str()).collect();

    bundles
        .iter()
        .filter(|bundle| {
            bundle
                .required_items
                .iter()
                .all(|id| present.contains(id.as_str()))
        })
        .map(|bundle| {
            let member_subtotal: Money = items
                .iter()
                .filter(|line| bundle.required_items.contains(&line.item.item_id))
                .map(|line| line.subtotal)
                .sum();
            AppliedDiscount {
                kind: DiscountKind::Bundle,
                source: bundle.name.clone(),
                rate: bundle.rate,
                amount: member_subtotal.multiply(bundle.rate),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CatalogItem;

    fn make_line(item_id: &str, subtotal: f64) -> SaleItemSummary {
        let subtotal = Money::from_f64(subtotal);
        SaleItemSummary {
            item: CatalogItem {
                item_id: item_id.to_string(),
                name: format!("Item {item_id}"),
                description: String::new(),
                price: subtotal,
                vat_rate: Decimal::new(12, 2),
            },
            quantity: 1,
            subtotal,
            vat_amount: subtotal.multiply(Decimal::new(12, 2)),
            total_with_vat: subtotal + subtotal.multiply(Decimal::new(12, 2)),
        }
    }

    fn standard_tiers() -> Vec<VolumeTier> {
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

    #[test]
    fn test_customer_component_known_customer() {
        let customers = HashMap::from([("1001".to_string(), Decimal::new(10, 2))]);
        let component =
            customer_component(&customers, "1001", Money::from_f64(1200.0)).unwrap();
        assert_eq!(component.amount, Money::from_f64(120.0));
        assert_eq!(component.kind, DiscountKind::Customer);
    }

    #[test]
    fn test_customer_component_unknown_customer() {
        let customers = HashMap::from([("1001".to_string(), Decimal::new(10, 2))]);
        assert!(customer_component(&customers, "9000", Money::from_f64(1200.0)).is_none());
    }

    #[test]
    fn test_volume_tier_thresholds_are_strict() {
        let tiers = standard_tiers();

        assert!(volume_component(&tiers, Money::from_f64(500.0)).is_none());

        let component = volume_component(&tiers, Money::from_f64(500.01)).unwrap();
        assert_eq!(component.rate, Decimal::new(2, 2));

        // Exactly 1000 stays in the 2% tier.
        let component = volume_component(&tiers, Money::from_f64(1000.0)).unwrap();
        assert_eq!(component.rate, Decimal::new(2, 2));

        let component = volume_component(&tiers, Money::from_f64(1000.01)).unwrap();
        assert_eq!(component.rate, Decimal::new(3, 2));
    }

    #[test]
    fn test_volume_highest_tier_wins_not_cumulative() {
        let tiers = standard_tiers();
        let component = volume_component(&tiers, Money::from_f64(1200.0)).unwrap();
        assert_eq!(component.amount, Money::from_f64(36.0));
    }

    #[test]
    fn test_item_components_per_matching_line() {
        let rates = HashMap::from([
            ("1".to_string(), Decimal::new(5, 2)),
            ("3".to_string(), Decimal::new(10, 2)),
        ]);
        let items = vec![make_line("1", 40.0), make_line("2", 100.0), make_line("3", 20.0)];

        let components = item_components(&rates, &items);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].amount, Money::from_f64(2.0));
        assert_eq!(components[1].amount, Money::from_f64(2.0));
    }

    #[test]
    fn test_bundle_applies_to_member_subtotals_only() {
        let bundles = vec![BundleDiscount::new("pair", ["X", "Y"], Decimal::new(15, 2))];
        let items = vec![make_line("X", 40.0), make_line("Y", 60.0), make_line("Z", 500.0)];

        let components = bundle_components(&bundles, &items);
        assert_eq!(components.len(), 1);
        // 15% × (40 + 60), independent of Z
        assert_eq!(components[0].amount, Money::from_f64(15.0));
        assert_eq!(components[0].source, "pair");
    }

    #[test]
    fn test_bundle_requires_full_set() {
        let bundles = vec![BundleDiscount::new("pair", ["X", "Y"], Decimal::new(15, 2))];
        let items = vec![make_line("X", 40.0), make_line("Z", 60.0)];

        assert!(bundle_components(&bundles, &items).is_empty());
    }

    #[test]
    fn test_multiple_bundles_apply_independently() {
        let bundles = vec![
            BundleDiscount::new("pair", ["X", "Y"], Decimal::new(10, 2)),
            BundleDiscount::new("trio", ["X", "Y", "Z"], Decimal::new(5, 2)),
        ];
        let items = vec![make_line("X", 40.0), make_line("Y", 60.0), make_line("Z", 100.0)];

        let components = bundle_components(&bundles, &items);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].amount, Money::from_f64(10.0));
        assert_eq!(components[1].amount, Money::from_f64(10.0));
    }
}
