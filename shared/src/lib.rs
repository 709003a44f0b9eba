//! Shared types for the kassa till engine
//!
//! Pure domain types used across crates: the `Money` value type,
//! catalog and discount models, and the sale summary/receipt structures
//! that cross the engine boundary. No I/O and no engine logic lives here.

pub mod models;
pub mod money;
pub mod sale;

// Re-exports
pub use money::Money;
pub use serde::{Deserialize, Serialize};
