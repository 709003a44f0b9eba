//! Cash register - the till's payment ledger

use shared::Money;
use shared::sale::PaymentRecord;

/// Accumulates the payments settled at this till.
///
/// The balance grows by the amount actually kept (tendered minus
/// change), not by the tendered amount.
#[derive(Debug, Default)]
pub struct CashRegister {
    balance: Money,
    payments: Vec<PaymentRecord>,
}

impl CashRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_payment(&mut self, payment: &PaymentRecord) {
        self.balance += payment.amount_paid();
        self.payments.push(payment.clone());
        tracing::info!(
            amount = %payment.amount_paid(),
            balance = %self.balance,
            "Payment recorded in till ledger"
        );
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn payment_count(&self) -> usize {
        self.payments.len()
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }
}
