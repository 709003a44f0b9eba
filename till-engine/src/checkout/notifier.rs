//! Completion notifier - post-payment fan-out
//!
//! After a sale settles, the registered collaborators are notified in a
//! fixed order: till ledger, receipt sink, completion handlers, sale
//! observers. Settlement has already committed by the time the fan-out
//! starts, so a collaborator failure is logged and swallowed; it never
//! aborts the sequence or unsettles the sale.

use super::register::CashRegister;
use crate::printing::ReceiptSink;
use shared::Money;
use shared::sale::{Receipt, SaleSummary};
use std::sync::Arc;

/// A collaborator that must replicate sale state after settlement
/// (accounting, inventory). Receives the full sale summary.
pub trait SaleCompletionHandler: Send + Sync {
    /// Name used in logs when the handler fails.
    fn name(&self) -> &str;

    fn handle(&self, sale: &SaleSummary) -> anyhow::Result<()>;
}

/// A lightweight listener that only tracks the paid amount (revenue
/// displays and logs).
pub trait SaleObserver: Send + Sync {
    fn on_sale_completed(&self, total_paid: Money) -> anyhow::Result<()>;
}

/// Orchestrates the post-payment sequence.
///
/// Handlers and observers are registered once at wiring time and are
/// invoked in registration order; the sets are not modified mid-sale.
pub struct CompletionNotifier {
    register: CashRegister,
    receipt_sink: Arc<dyn ReceiptSink>,
    handlers: Vec<Arc<dyn SaleCompletionHandler>>,
    observers: Vec<Arc<dyn SaleObserver>>,
}

impl CompletionNotifier {
    pub fn new(receipt_sink: Arc<dyn ReceiptSink>) -> Self {
        Self {
            register: CashRegister::new(),
            receipt_sink,
            handlers: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn register_handler(&mut self, handler: Arc<dyn SaleCompletionHandler>) {
        self.handlers.push(handler);
    }

    pub fn register_observer(&mut self, observer: Arc<dyn SaleObserver>) {
        self.observers.push(observer);
    }

    /// The till ledger, for balance inspection.
    pub fn till(&self) -> &CashRegister {
        &self.register
    }

    /// Fan out a settled sale.
    pub fn sale_completed(&mut self, summary: &SaleSummary, receipt: &Receipt) {
        // 1. Record the payment in the till ledger
        self.register.record_payment(&receipt.payment);

        // 2. Hand the receipt snapshot to the sink
        if let Err(e) = self.receipt_sink.print(receipt) {
            tracing::error!(
                error = %e,
                sale_id = %summary.sale_id,
                "Receipt sink failed, settlement stands"
            );
        }

        // 3. Completion handlers, in registration order
        for handler in &self.handlers {
            if let Err(e) = handler.handle(summary) {
                tracing::error!(
                    error = %e,
                    handler = handler.name(),
                    sale_id = %summary.sale_id,
                    "Completion handler failed, continuing with the rest"
                );
            }
        }

        // 4. Sale observers, in registration order
        let total_paid = summary.total_with_vat;
        for observer in &self.observers {
            if let Err(e) = observer.on_sale_completed(total_paid) {
                tracing::warn!(
                    error = %e,
                    sale_id = %summary.sale_id,
                    "Sale observer failed, continuing with the rest"
                );
            }
        }
    }
}
