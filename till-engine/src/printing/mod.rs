//! Receipt printing
//!
//! Rendering of receipt snapshots into fixed-width till paper text, and
//! the sink contract the completion notifier hands receipts to.

pub mod renderer;

pub use renderer::ReceiptRenderer;

use shared::sale::Receipt;

/// Where finished receipts go (a printer, a spooler, a test buffer).
pub trait ReceiptSink: Send + Sync {
    fn print(&self, receipt: &Receipt) -> anyhow::Result<()>;
}

/// Renders receipts and writes them to stdout.
pub struct ConsolePrinter {
    renderer: ReceiptRenderer,
}

impl ConsolePrinter {
    /// Common widths: 32 characters for 58mm paper, 48 for 80mm.
    pub fn new(width: usize) -> Self {
        Self {
            renderer: ReceiptRenderer::new(width),
        }
    }
}

impl ReceiptSink for ConsolePrinter {
    fn print(&self, receipt: &Receipt) -> anyhow::Result<()> {
        println!("{}", self.renderer.render(receipt));
        Ok(())
    }
}
