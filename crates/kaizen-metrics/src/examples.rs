//! Built-in demo tables.
//!
//! Used as the documented fallback for empty aggregation groups and by the
//! CLI's `example` command to seed starter files.

use kaizen_model::{ProductRow, ProductTable, ResourceRow, ResourceTable};

/// A small mixed-product demo table (three SKUs with prices and standard
/// hours).
pub fn example_products() -> ProductTable {
    let row = |product: &str, quantity: f64, price: f64, std_hours: f64| ProductRow {
        product: product.to_owned(),
        quantity,
        price: Some(price),
        std_hours: Some(std_hours),
    };
    ProductTable::new(vec![
        row("A", 1000.0, 50.0, 0.2),
        row("B", 400.0, 120.0, 0.5),
        row("C", 200.0, 200.0, 1.2),
    ])
}

/// A demo resource table with one line per category.
pub fn example_resources() -> ResourceTable {
    let row = |resource: &str, quantity: f64, unit_cost: f64, unit: &str| ResourceRow {
        resource: resource.to_owned(),
        quantity,
        unit_cost,
        unit: unit.to_owned(),
        category: None,
    };
    ResourceTable::new(vec![
        row("Labor", 120.0, 6.0, "hours"),
        row("Machine", 75.0, 20.0, "machine_hours"),
        row("Materials", 1.0, 30000.0, "currency"),
        row("Energy", 1.0, 5000.0, "currency"),
        row("Overhead", 1.0, 12000.0, "currency"),
    ])
}
