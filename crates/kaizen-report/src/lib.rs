//! Report layer for the productivity metrics engine.
//!
//! The core computes metric sets; this crate turns them into things a
//! caller can look at or save:
//!
//! - long-form `{metric, value}` rows (and wide per-period rows) that
//!   serialize cleanly to CSV and JSON
//! - comfy-table rendering for the terminal
//!
//! Serialization policy: a not-computable value is a missing value - an
//! empty CSV cell or JSON `null` - and never the number zero.

mod export;
mod render;
mod rows;

// === Row shapes ===
pub use rows::{ComparisonCsvRow, MetricRow, PeriodRow, comparison_rows, metric_rows, period_rows};

// === CSV / JSON export ===
pub use export::{
    aggregate_json, comparison_json, metrics_json, write_aggregate_csv, write_comparison_csv,
    write_metrics_csv,
};

// === Terminal rendering ===
pub use render::{format_value, render_aggregate, render_comparison, render_metrics};
