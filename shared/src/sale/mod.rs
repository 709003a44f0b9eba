//! Sale boundary types
//!
//! The data that crosses the engine boundary once a sale is summarised
//! or settled: line/sale summaries, the payment record, the receipt
//! snapshot, and the discount trace. The mutable `Sale` aggregate itself
//! lives in the engine crate; everything here is immutable by
//! construction.

pub mod discount;
pub mod receipt;
pub mod types;

// Re-exports
pub use discount::{AppliedDiscount, DiscountKind, DiscountResult};
pub use receipt::Receipt;
pub use types::{PaymentRecord, SaleItemSummary, SaleSummary};
