//! Revenue observers
//!
//! Lightweight `SaleObserver` implementations that track total revenue
//! since start: one prints to the console for the cashier, one emits a
//! structured log record under the `revenue` target.

use crate::checkout::notifier::SaleObserver;
use parking_lot::Mutex;
use shared::Money;

/// Shows the running total revenue on the console.
#[derive(Debug, Default)]
pub struct TotalRevenueDisplay {
    total: Mutex<Money>,
}

impl TotalRevenueDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Money {
        *self.total.lock()
    }
}

impl SaleObserver for TotalRevenueDisplay {
    fn on_sale_completed(&self, total_paid: Money) -> anyhow::Result<()> {
        let mut total = self.total.lock();
        *total += total_paid;
        println!();
        println!("*** Total revenue since start: {} ***", *total);
        Ok(())
    }
}

/// Writes the running total revenue to the `revenue` log target.
#[derive(Debug, Default)]
pub struct TotalRevenueLog {
    total: Mutex<Money>,
}

impl TotalRevenueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Money {
        *self.total.lock()
    }
}

impl SaleObserver for TotalRevenueLog {
    fn on_sale_completed(&self, total_paid: Money) -> anyhow::Result<()> {
        let mut total = self.total.lock();
        *total += total_paid;
        tracing::info!(
            target: "revenue",
            total_paid = %total_paid,
            total_revenue = %*total,
            "Sale completed"
        );
        Ok(())
    }
}
