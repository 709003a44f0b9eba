//! Demo configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | LOG_LEVEL | info | tracing filter for the demo run |
//! | RECEIPT_WIDTH | 48 | receipt paper width in characters |

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub receipt_width: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            receipt_width: env::var("RECEIPT_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(48),
        }
    }
}
