//! Bookkeeping contract and in-memory backend

use parking_lot::Mutex;
use shared::Money;
use shared::sale::SaleSummary;

/// External bookkeeping system.
pub trait AccountingService: Send + Sync {
    /// Record a settled sale in the ledger.
    fn record_sale(&self, summary: &SaleSummary) -> anyhow::Result<()>;

    /// Update the running revenue statistics with the paid amount.
    fn update_statistics(&self, total_paid: Money);
}

#[derive(Debug, Default)]
struct Statistics {
    sale_count: usize,
    revenue: Money,
}

/// In-memory bookkeeping backend.
#[derive(Debug, Default)]
pub struct InMemoryAccounting {
    ledger: Mutex<Vec<SaleSummary>>,
    statistics: Mutex<Statistics>,
}

impl InMemoryAccounting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded_sales(&self) -> usize {
        self.ledger.lock().len()
    }

    pub fn total_revenue(&self) -> Money {
        self.statistics.lock().revenue
    }
}

impl AccountingService for InMemoryAccounting {
    fn record_sale(&self, summary: &SaleSummary) -> anyhow::Result<()> {
        tracing::info!(
            sale_id = %summary.sale_id,
            total = %summary.total_with_vat,
            vat = %summary.total_vat,
            "Sale recorded in accounting"
        );
        self.ledger.lock().push(summary.clone());
        Ok(())
    }

    fn update_statistics(&self, total_paid: Money) {
        let mut statistics = self.statistics.lock();
        statistics.sale_count += 1;
        statistics.revenue += total_paid;
        tracing::debug!(
            sale_count = statistics.sale_count,
            revenue = %statistics.revenue,
            "Sales statistics updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_summary(total_with_vat: f64) -> SaleSummary {
        SaleSummary {
            sale_id: "sale-1".to_string(),
            items: Vec::new(),
            total: Money::from_f64(total_with_vat),
            total_vat: Money::zero(),
            discount: Money::zero(),
            total_with_vat: Money::from_f64(total_with_vat),
            customer_id: None,
            opened_at: Utc::now(),
        }
    }

    #[test]
    fn test_records_and_accumulates() {
        let accounting = InMemoryAccounting::new();

        accounting.record_sale(&make_summary(50.4)).unwrap();
        accounting.update_statistics(Money::from_f64(50.4));
        accounting.record_sale(&make_summary(100.0)).unwrap();
        accounting.update_statistics(Money::from_f64(100.0));

        assert_eq!(accounting.recorded_sales(), 2);
        assert_eq!(accounting.total_revenue(), Money::from_f64(150.4));
    }
}
