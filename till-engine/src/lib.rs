//! kassa till engine
//!
//! In-memory engine for a single retail point-of-sale transaction:
//!
//! - **sale**: the `Sale` aggregate - line items, totals, discount state,
//!   settlement
//! - **pricing**: the discount pipeline (customer, volume, item and bundle
//!   components)
//! - **checkout**: the `CheckoutManager` facade and the post-payment
//!   completion fan-out
//! - **integration**: collaborator contracts (catalog, discounts,
//!   inventory, accounting) and in-memory backends
//! - **printing**: receipt rendering and the receipt sink
//!
//! # Transaction Flow
//!
//! ```text
//! start_sale
//!     ├─ register_item (catalog lookup, merge on repeat id)   n times
//!     ├─ request_discount (pricing pipeline, last write wins)  optional
//!     ├─ end_sale (summary for the cashier display)
//!     └─ pay
//!          ├─ settle (change = tendered − due, receipt snapshot)
//!          └─ completion fan-out
//!               ├─ 1. till ledger
//!               ├─ 2. receipt sink
//!               ├─ 3. completion handlers (accounting, inventory)
//!               └─ 4. sale observers (revenue trackers)
//! ```
//!
//! One sale is mutated by one logical caller at a time; the engine holds
//! no locks of its own.

pub mod checkout;
pub mod config;
pub mod integration;
pub mod logging;
pub mod pricing;
pub mod printing;
pub mod sale;

// Re-exports
pub use checkout::{CheckoutError, CheckoutManager, CompletionNotifier};
pub use config::Config;
pub use logging::init_logger;
pub use sale::{Sale, SaleError};
