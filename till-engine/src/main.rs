use shared::Money;
use std::sync::Arc;
use till_engine::checkout::{CheckoutError, CheckoutManager, CompletionNotifier};
use till_engine::integration::{
    AccountingHandler, CatalogError, InMemoryAccounting, InMemoryCatalog, InMemoryInventory,
    InventoryHandler, RuleBasedDiscounts, TotalRevenueDisplay, TotalRevenueLog,
};
use till_engine::pricing::DiscountEngine;
use till_engine::printing::ConsolePrinter;
use till_engine::{Config, init_logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration and initialise logging
    let config = Config::from_env();
    init_logger(&config.log_level)?;
    tracing::info!("kassa till demo starting");

    // 2. Wire the collaborators
    let catalog = Arc::new(InMemoryCatalog::with_test_catalog());
    let inventory = Arc::new(InMemoryInventory::with_test_stock());
    let accounting = Arc::new(InMemoryAccounting::new());
    let discounts = Arc::new(RuleBasedDiscounts::new(DiscountEngine::with_demo_rules()));

    // 3. Set up the completion fan-out
    let mut notifier = CompletionNotifier::new(Arc::new(ConsolePrinter::new(config.receipt_width)));
    notifier.register_handler(Arc::new(AccountingHandler::new(accounting.clone())));
    notifier.register_handler(Arc::new(InventoryHandler::new(inventory.clone())));
    notifier.register_observer(Arc::new(TotalRevenueDisplay::new()));
    notifier.register_observer(Arc::new(TotalRevenueLog::new()));

    let mut manager = CheckoutManager::new(catalog, discounts, notifier);

    // 4. Run a scripted checkout
    manager.start_sale();

    register(&mut manager, "1", 2);
    register(&mut manager, "1", 1); // merges into the existing line
    register(&mut manager, "2", 1);
    register(&mut manager, "3", 1);

    // Failed lookups keep their kind: a typo vs a backend outage
    register(&mut manager, "42", 1);
    register(&mut manager, "9999", 1);

    let discount = manager.request_discount("1001")?;
    println!("Discount for customer 1001: {}", discount.total);
    for component in &discount.breakdown {
        println!("  {:?} ({}): {}", component.kind, component.source, component.amount);
    }

    let summary = manager.end_sale()?;
    println!();
    println!("Amount due: {}", summary.total_with_vat);

    let outcome = manager.pay(Money::from_f64(100.0))?;
    println!("Change: {}", outcome.change);

    // 5. Final state of the surrounding systems
    println!();
    println!("Till balance: {}", manager.notifier().till().balance());
    println!("Sales in accounting: {}", accounting.recorded_sales());
    println!(
        "Cornflakes left in stock: {}",
        inventory.stock_level("1").unwrap_or(0)
    );

    Ok(())
}

fn register(manager: &mut CheckoutManager, item_id: &str, quantity: i32) {
    match manager.register_item(item_id, quantity) {
        Ok(registration) => {
            let merged = if registration.merged { " (merged)" } else { "" };
            println!(
                "{} x {}{merged}  running total: {}",
                quantity, registration.item.name, registration.running_total
            );
        }
        Err(CheckoutError::Catalog(CatalogError::ItemNotFound(id))) => {
            println!("No item with id {id}");
        }
        Err(CheckoutError::Catalog(CatalogError::Unavailable(_))) => {
            println!("Item catalog unavailable, please try again");
        }
        Err(e) => {
            tracing::error!(error = %e, item_id = %item_id, "Could not register item");
        }
    }
}
