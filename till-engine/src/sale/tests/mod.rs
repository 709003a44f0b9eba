use super::*;
use rust_decimal::Decimal;


/// Catalog item with a price in SEK and a VAT rate given in percent.
fn make_item(item_id: &str, price: f64, vat_percent: i64) -> CatalogItem {
    CatalogItem {
        item_id: item_id.to_string(),
        name: format!("Item {item_id}"),
        description: format!("Test item {item_id}"),
        price: Money::from_f64(price),
        vat_rate: Decimal::new(vat_percent, 2),
    }
}

fn money(value: f64) -> Money {
    Money::from_f64(value)
}
