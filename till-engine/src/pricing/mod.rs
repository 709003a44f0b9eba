//! Discount pipeline
//!
//! Stateless evaluation of the configured discount rules against a
//! sale's line items:
//!
//! - **calculator**: pure per-component computations (customer, volume,
//!   item, bundle)
//! - **engine**: composes the components into a `DiscountResult` with an
//!   audit trace
//!
//! All components are additive; the engine sums them and never
//! compounds one on top of another.

pub mod calculator;
pub mod engine;

pub use engine::DiscountEngine;
