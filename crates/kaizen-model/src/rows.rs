//! Typed product and resource rows, the canonical shape after
//! normalization.

use crate::Category;

/// One SKU's period volume and optional unit economics.
///
/// `price` and `std_hours` are `None` when the source cell was absent or
/// unparseable; absence is distinct from zero because it selects a
/// different output formula downstream.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProductRow {
    pub product: String,
    pub quantity: f64,
    pub price: Option<f64>,
    pub std_hours: Option<f64>,
}

/// One input/factor line (labor, machine, materials, energy, overhead, or
/// unclassified).
///
/// `quantity` and `unit_cost` are always present and non-negative after
/// normalization. `category` is an optional pre-label that bypasses the
/// heuristic classifier for this row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResourceRow {
    pub resource: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub unit: String,
    pub category: Option<Category>,
}

/// A normalized product table. Immutable once handed to a computation
/// stage; normalization always allocates a fresh table.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ProductTable {
    pub rows: Vec<ProductRow>,
}

impl ProductTable {
    pub fn new(rows: Vec<ProductRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A normalized resource table.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ResourceTable {
    pub rows: Vec<ResourceRow>,
}

impl ResourceTable {
    pub fn new(rows: Vec<ResourceRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
