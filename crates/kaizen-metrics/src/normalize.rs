//! Table normalization: required-column validation and numeric coercion.
//!
//! Coercion policy:
//!
//! - `quantity` and `unit_cost` always become numbers; unparseable or
//!   missing cells coerce to `0.0`, never an error. Negative values are
//!   clamped to `0.0` (the domain is non-negative) with a warning.
//! - `price` and `std_hours` become absent (`None`) when unparseable or
//!   missing, never `0.0`: absence selects a different output formula
//!   downstream, so it must stay distinguishable from zero.
//!
//! Both normalizers are pure and allocate fresh tables; the caller's raw
//! table is never mutated.

use tracing::warn;

use kaizen_model::{
    Category, CellValue, ProductRow, ProductTable, RawRow, RawTable, ResourceRow, ResourceTable,
    SchemaError, TableKind,
};

use crate::numeric::parse_numeric;

const PRODUCT_REQUIRED: [&str; 2] = ["product", "quantity"];
const RESOURCE_REQUIRED: [&str; 3] = ["resource", "quantity", "unit_cost"];

/// Validate and coerce a raw product table.
///
/// Requires the `product` and `quantity` columns; `price` and `std_hours`
/// are optional.
pub fn normalize_products(table: &RawTable) -> Result<ProductTable, SchemaError> {
    require_columns(table, TableKind::Products, &PRODUCT_REQUIRED)?;
    let rows = table
        .rows
        .iter()
        .map(|row| ProductRow {
            product: text_cell(row, "product"),
            quantity: coerced_cell(row, "quantity"),
            price: optional_cell(row, "price"),
            std_hours: optional_cell(row, "std_hours"),
        })
        .collect();
    Ok(ProductTable::new(rows))
}

/// Validate and coerce a raw resource table.
///
/// Requires the `resource`, `quantity`, and `unit_cost` columns. The
/// `unit` column defaults to the literal `"unit"`; an optional `category`
/// column pre-labels rows for the classifier.
pub fn normalize_resources(table: &RawTable) -> Result<ResourceTable, SchemaError> {
    require_columns(table, TableKind::Resources, &RESOURCE_REQUIRED)?;
    let rows = table
        .rows
        .iter()
        .map(|row| ResourceRow {
            resource: text_cell(row, "resource"),
            quantity: coerced_cell(row, "quantity"),
            unit_cost: coerced_cell(row, "unit_cost"),
            unit: row
                .get("unit")
                .and_then(CellValue::as_text)
                .map_or_else(|| "unit".to_owned(), str::to_owned),
            category: row
                .get("category")
                .and_then(CellValue::as_text)
                .and_then(Category::parse),
        })
        .collect();
    Ok(ResourceTable::new(rows))
}

fn require_columns(
    table: &RawTable,
    kind: TableKind,
    required: &[&str],
) -> Result<(), SchemaError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !table.has_column(column))
        .map(|column| (*column).to_owned())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns {
            table: kind,
            columns: missing,
        })
    }
}

fn text_cell(row: &RawRow, column: &str) -> String {
    row.get(column)
        .and_then(CellValue::as_text)
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Mandatory numeric cell: unparseable becomes 0.0, negatives clamp to 0.
fn coerced_cell(row: &RawRow, column: &str) -> f64 {
    let value = row
        .get(column)
        .and_then(CellValue::as_text)
        .and_then(parse_numeric)
        .unwrap_or(0.0);
    if value < 0.0 {
        warn!(column, value, "negative value clamped to 0");
        0.0
    } else {
        value
    }
}

/// Optional numeric cell: unparseable or missing becomes absent, not 0.
fn optional_cell(row: &RawRow, column: &str) -> Option<f64> {
    row.get(column)
        .and_then(CellValue::as_text)
        .and_then(parse_numeric)
}
