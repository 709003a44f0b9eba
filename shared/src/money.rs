//! Money type with fixed two-decimal precision
//!
//! All monetary values in the system flow through `Money`, which wraps
//! `Decimal` and rescales to two fraction digits with half-up rounding
//! after every operation. Amounts are in SEK; there is no multi-currency
//! support.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Scale for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Rescale a raw decimal to the monetary scale.
///
/// Half-up here means away from zero on a midpoint, matching how a till
/// rounds öre: 0.005 → 0.01 and -0.005 → -0.01.
fn scaled(value: Decimal) -> Decimal {
    let mut v = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(DECIMAL_PLACES);
    v
}

/// An immutable monetary amount, always held at two decimal places.
///
/// Every arithmetic operation returns a new value rescaled to the same
/// precision, so `(a + b) + c` and `a + (b + c)` agree at the rounded
/// precision. Negative amounts are legal (refunds, negative change).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(Decimal);

impl Money {
    /// Create from a decimal value, rescaling to two places.
    pub fn new(value: Decimal) -> Self {
        Money(scaled(value))
    }

    /// Create from a float literal, rescaling to two places.
    ///
    /// A non-finite input cannot represent an amount; it is logged and
    /// treated as zero rather than corrupting a running total.
    pub fn from_f64(value: f64) -> Self {
        let value = Decimal::from_f64(value).unwrap_or_else(|| {
            tracing::error!(value = ?value, "Non-finite f64 used as monetary amount, defaulting to zero");
            Decimal::ZERO
        });
        Money(scaled(value))
    }

    /// Zero amount.
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// The underlying decimal value.
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a dimensionless factor (a VAT or discount rate).
    ///
    /// Takes a scalar rather than another `Money` so that amounts can
    /// never be multiplied together.
    pub fn multiply(&self, factor: Decimal) -> Self {
        Money(scaled(self.0 * factor))
    }

    /// Multiply by an item quantity.
    pub fn times(&self, quantity: i32) -> Self {
        Money(scaled(self.0 * Decimal::from(quantity)))
    }

    /// Check whether the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check whether the amount is less than zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Check whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Money(scaled(self.0 + other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Money(scaled(self.0 - other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Rendered as the amount with two fraction digits and the currency suffix,
/// e.g. `49.60 SEK`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} SEK", self.0)
    }
}
