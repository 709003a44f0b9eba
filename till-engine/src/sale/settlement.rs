//! Cash payment settlement

use chrono::Utc;
use shared::Money;
use shared::sale::PaymentRecord;

/// A cash amount handed over at the till.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashPayment {
    tendered: Money,
}

impl CashPayment {
    pub fn new(tendered: Money) -> Self {
        Self { tendered }
    }

    pub fn tendered(&self) -> Money {
        self.tendered
    }

    /// Change owed to the customer: tendered − amount due.
    ///
    /// Negative when the customer underpaid; the core does not enforce
    /// tendered ≥ due.
    pub fn change_against(&self, amount_due: Money) -> Money {
        self.tendered - amount_due
    }

    /// Finalise into an immutable payment record, stamped now.
    pub fn into_record(self, amount_due: Money) -> PaymentRecord {
        PaymentRecord {
            tendered: self.tendered,
            change: self.change_against(amount_due),
            settled_at: Utc::now(),
        }
    }
}
