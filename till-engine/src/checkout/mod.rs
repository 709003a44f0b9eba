//! Checkout orchestration
//!
//! - **manager**: the till-facing facade - start a sale, register items,
//!   request a discount, end the sale, take payment
//! - **notifier**: post-payment fan-out to the registered collaborators,
//!   in fixed order, tolerating their failures
//! - **register**: the cash drawer ledger

pub mod manager;
pub mod notifier;
pub mod register;

// Re-exports
pub use manager::{CheckoutError, CheckoutManager, PaymentOutcome};
pub use notifier::{CompletionNotifier, SaleCompletionHandler, SaleObserver};
pub use register::CashRegister;
