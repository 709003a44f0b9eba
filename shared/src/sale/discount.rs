//! Discount trace - tracks which rules contributed to a sale's discount
//!
//! The sale itself only stores the summed discount amount; the
//! breakdown is kept for logging and audit.

use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which part of the pipeline produced a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    Customer,
    Volume,
    Item,
    Bundle,
}

/// One additive discount component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    pub kind: DiscountKind,
    /// Rule identity: customer id, item id, bundle name, or the volume
    /// threshold that was crossed
    pub source: String,
    /// Rate the component was computed with (0.10 = 10%)
    pub rate: Decimal,
    /// Calculated amount for this component
    pub amount: Money,
}

/// Result of a discount computation: the summed amount plus the
/// per-component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    pub total: Money,
    pub breakdown: Vec<AppliedDiscount>,
}

impl DiscountResult {
    /// No discount at all.
    pub fn none() -> Self {
        Self {
            total: Money::zero(),
            breakdown: Vec::new(),
        }
    }

    /// Build a result from components, summing their amounts.
    pub fn from_components(breakdown: Vec<AppliedDiscount>) -> Self {
        let total = breakdown.iter().map(|c| c.amount).sum();
        Self { total, breakdown }
    }

    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_components_sums_amounts() {
        let result = DiscountResult::from_components(vec![
            AppliedDiscount {
                kind: DiscountKind::Customer,
                source: "1001".to_string(),
                rate: Decimal::new(10, 2),
                amount: Money::from_f64(120.0),
            },
            AppliedDiscount {
                kind: DiscountKind::Volume,
                source: "1000".to_string(),
                rate: Decimal::new(3, 2),
                amount: Money::from_f64(36.0),
            },
        ]);

        assert_eq!(result.total, Money::from_f64(156.0));
        assert_eq!(result.breakdown.len(), 2);
    }

    #[test]
    fn test_none_is_zero() {
        assert!(DiscountResult::none().is_zero());
        assert!(DiscountResult::from_components(Vec::new()).is_zero());
    }
}
