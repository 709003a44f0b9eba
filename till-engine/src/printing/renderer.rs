//! Receipt renderer
//!
//! Renders a receipt snapshot into fixed-width text with amounts
//! right-aligned in the last column, the way a thermal till printer
//! lays them out.

use shared::Money;
use shared::sale::Receipt;
use std::fmt::Write;

/// Receipt text renderer.
pub struct ReceiptRenderer {
    width: usize,
}

impl ReceiptRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render a receipt to printable text.
    pub fn render(&self, receipt: &Receipt) -> String {
        let mut out = String::new();

        self.render_header(&mut out, receipt);
        self.render_items(&mut out, receipt);
        self.render_totals(&mut out, receipt);
        self.render_payment(&mut out, receipt);
        self.render_footer(&mut out);

        out
    }

    fn render_header(&self, out: &mut String, receipt: &Receipt) {
        let _ = writeln!(out, "{}", self.rail("Begin receipt"));
        let _ = writeln!(out, "Time of sale: {}", receipt.sale_time.format("%Y-%m-%d %H:%M"));
        out.push('\n');
    }

    fn render_items(&self, out: &mut String, receipt: &Receipt) {
        for line in &receipt.items {
            let left = format!(
                "{} {} x {}",
                line.item.name,
                line.quantity,
                line.item.price
            );
            let _ = writeln!(out, "{}", self.line_with_amount(&left, line.subtotal));
        }
        out.push('\n');
    }

    fn render_totals(&self, out: &mut String, receipt: &Receipt) {
        let _ = writeln!(out, "{}", self.line_with_amount("Subtotal:", receipt.total));
        let _ = writeln!(out, "{}", self.line_with_amount("VAT:", receipt.total_vat));
        if receipt.has_discount() {
            let _ = writeln!(
                out,
                "{}",
                self.line_with_amount("Discount:", Money::zero() - receipt.discount)
            );
        }
        let _ = writeln!(out, "{}", self.line_with_amount("Total:", receipt.total_with_vat));
        out.push('\n');
    }

    fn render_payment(&self, out: &mut String, receipt: &Receipt) {
        let _ = writeln!(out, "{}", self.line_with_amount("Cash:", receipt.payment.tendered));
        let _ = writeln!(out, "{}", self.line_with_amount("Change:", receipt.payment.change));
    }

    fn render_footer(&self, out: &mut String) {
        out.push_str(&self.rail("End receipt"));
    }

    /// A separator rail with a centred label, e.g.
    /// `----------- Begin receipt -----------`.
    fn rail(&self, label: &str) -> String {
        let label = format!(" {label} ");
        if label.len() >= self.width {
            return label;
        }
        let dashes = self.width - label.len();
        let left = dashes / 2;
        format!("{}{}{}", "-".repeat(left), label, "-".repeat(dashes - left))
    }

    /// Left text with the amount right-aligned at the paper edge.
    fn line_with_amount(&self, left: &str, amount: Money) -> String {
        let amount = amount.to_string();
        let used = left.chars().count() + amount.chars().count();
        let spaces = if used + 1 > self.width { 1 } else { self.width - used };
        format!("{left}{}{amount}", " ".repeat(spaces))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use shared::models::CatalogItem;
    use shared::sale::{PaymentRecord, SaleItemSummary};

    fn make_receipt(discount: f64) -> Receipt {
        let item = CatalogItem {
            item_id: "1".to_string(),
            name: "Kellogg's Cornflakes".to_string(),
            description: String::new(),
            price: Money::from_f64(10.0),
            vat_rate: Decimal::new(12, 2),
        };
        let discount = Money::from_f64(discount);
        let total_with_vat = Money::from_f64(33.6) - discount;
        Receipt {
            items: vec![SaleItemSummary {
                item,
                quantity: 3,
                subtotal: Money::from_f64(30.0),
                vat_amount: Money::from_f64(3.6),
                total_with_vat: Money::from_f64(33.6),
            }],
            total: Money::from_f64(30.0),
            total_vat: Money::from_f64(3.6),
            discount,
            total_with_vat,
            payment: PaymentRecord {
                tendered: Money::from_f64(100.0),
                change: Money::from_f64(100.0) - total_with_vat,
                settled_at: Utc::now(),
            },
            sale_time: Utc::now(),
        }
    }

    #[test]
    fn test_render_contains_all_sections() {
        let rendered = ReceiptRenderer::new(48).render(&make_receipt(0.0));

        assert!(rendered.contains("Begin receipt"));
        assert!(rendered.contains("Time of sale:"));
        assert!(rendered.contains("Kellogg's Cornflakes 3 x 10.00 SEK"));
        assert!(rendered.contains("30.00 SEK"));
        assert!(rendered.contains("Total:"));
        assert!(rendered.contains("Cash:"));
        assert!(rendered.contains("Change:"));
        assert!(rendered.contains("End receipt"));
    }

    #[test]
    fn test_discount_line_only_when_discounted() {
        let renderer = ReceiptRenderer::new(48);

        assert!(!renderer.render(&make_receipt(0.0)).contains("Discount:"));

        let rendered = renderer.render(&make_receipt(5.0));
        assert!(rendered.contains("Discount:"));
        assert!(rendered.contains("-5.00 SEK"));
    }

    #[test]
    fn test_amounts_right_aligned_to_width() {
        let rendered = ReceiptRenderer::new(48).render(&make_receipt(0.0));
        for line in rendered.lines().filter(|l| l.ends_with("SEK")) {
            assert_eq!(line.chars().count(), 48, "line not at paper width: {line:?}");
        }
    }

    #[test]
    fn test_rails_match_paper_width() {
        let rendered = ReceiptRenderer::new(32).render(&make_receipt(0.0));
        let first = rendered.lines().next().unwrap();
        assert_eq!(first.chars().count(), 32);
        assert!(first.starts_with('-') && first.ends_with('-'));
    }
}
