//! Core data model for the productivity & Kaizen metrics engine.
//!
//! This crate defines the tabular types exchanged between the ingest
//! boundary, the calculation engine, and the report layer:
//!
//! - **Raw tables**: string-celled tables as they arrive from CSV or
//!   programmatic callers, before any validation
//! - **Normalized tables**: typed product and resource rows with the
//!   coercion policy already applied
//! - **Settings**: which output measure is used and how nominal values
//!   are deflated
//! - **Metrics**: the fixed metric vocabulary and the `MetricValue`
//!   not-computable marker
//!
//! All entities are ephemeral: constructed fresh per computation call and
//! never persisted by the core.

mod category;
mod error;
mod fingerprint;
mod metric;
mod rows;
mod settings;
mod table;

// === Raw tables ===
pub use table::{CellValue, RawRow, RawTable};

// === Normalized rows ===
pub use rows::{ProductRow, ProductTable, ResourceRow, ResourceTable};

// === Categories ===
pub use category::{Category, CategoryTotals};

// === Metrics ===
pub use metric::{Metric, MetricSet, MetricValue};

// === Configuration ===
pub use settings::Settings;

// === Errors ===
pub use error::{SchemaError, TableKind};

// === Fingerprinting ===
pub use fingerprint::input_fingerprint;
