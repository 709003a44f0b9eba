//! Item catalog contract and in-memory backend

use rust_decimal::Decimal;
use shared::Money;
use shared::models::CatalogItem;
use std::collections::HashMap;
use thiserror::Error;

/// Item id that simulates a lost connection to the catalog backend.
const BACKEND_DOWN_ITEM_ID: &str = "9999";

/// Catalog lookup failures.
///
/// The two kinds stay distinct all the way to the till: "no such item"
/// is a final answer, "unavailable" is transient and worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("item catalog unavailable: {0}")]
    Unavailable(String),
}

/// Item lookup service.
pub trait Catalog: Send + Sync {
    fn find_item(&self, item_id: &str) -> Result<CatalogItem, CatalogError>;
}

/// In-memory catalog backend.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: HashMap<String, CatalogItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the demo assortment.
    pub fn with_test_catalog() -> Self {
        let mut catalog = Self::new();
        for item in test_catalog_items() {
            catalog.insert(item);
        }
        catalog
    }

    pub fn insert(&mut self, item: CatalogItem) {
        self.items.insert(item.item_id.clone(), item);
    }
}

impl Catalog for InMemoryCatalog {
    fn find_item(&self, item_id: &str) -> Result<CatalogItem, CatalogError> {
        if item_id == BACKEND_DOWN_ITEM_ID {
            return Err(CatalogError::Unavailable(
                "could not reach the item catalog".to_string(),
            ));
        }

        self.items
            .get(item_id)
            .cloned()
            .ok_or_else(|| CatalogError::ItemNotFound(item_id.to_string()))
    }
}

fn item(item_id: &str, name: &str, description: &str, price: f64, vat_percent: i64) -> CatalogItem {
    CatalogItem {
        item_id: item_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_f64(price),
        vat_rate: Decimal::new(vat_percent, 2),
    }
}

/// The demo assortment: five grocery items with 12% or 25% VAT.
pub fn test_catalog_items() -> Vec<CatalogItem> {
    vec![
        item("1", "Kellogg's Cornflakes", "500g, whole grain, fortified with vitamins", 10.0, 12),
        item("2", "Barilla Pasta", "500g, spaghetti, bronze cut", 15.0, 12),
        item("3", "Arla Milk", "1L, organic whole milk, pasteurized", 22.0, 12),
        item("4", "Wasa Crispbread", "275g, whole grain, low sugar", 30.0, 25),
        item("5", "Fazer Chocolate", "200g, milk chocolate, Finnish quality", 75.0, 25),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_item() {
        let catalog = InMemoryCatalog::with_test_catalog();
        let item = catalog.find_item("1").unwrap();
        assert_eq!(item.name, "Kellogg's Cornflakes");
        assert_eq!(item.price, Money::from_f64(10.0));
        assert_eq!(item.vat_rate, Decimal::new(12, 2));
    }

    #[test]
    fn test_unknown_item_is_not_found() {
        let catalog = InMemoryCatalog::with_test_catalog();
        assert_eq!(
            catalog.find_item("42").unwrap_err(),
            CatalogError::ItemNotFound("42".to_string())
        );
    }

    #[test]
    fn test_backend_down_id_is_unavailable_not_missing() {
        let catalog = InMemoryCatalog::with_test_catalog();
        let err = catalog.find_item("9999").unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }
}
