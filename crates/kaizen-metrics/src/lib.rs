//! Productivity & Kaizen metrics engine.
//!
//! A small pipeline of pure, synchronous stages over tabular data:
//!
//! 1. **Normalizer**: validate required columns and coerce raw tables into
//!    the canonical numeric shape
//! 2. **Output valuator**: gross output value and optional standard-hours
//!    output from a product table
//! 3. **Input cost aggregator**: total input cost plus a categorized
//!    breakdown (labor/machine/materials/energy/overhead)
//! 4. **Metrics engine**: combine the aggregates (optionally deflated)
//!    into the fixed metric vocabulary; single period, before/after
//!    comparison, and multi-period aggregation
//!
//! Data flows one-directional: raw tables -> normalized tables -> scalar
//! aggregates -> metric sets. No stage performs I/O or holds hidden state,
//! so calls are idempotent and safe to run in parallel across independent
//! inputs.
//!
//! # Example
//!
//! ```
//! use kaizen_metrics::{compute_metrics_normalized, example_products, example_resources};
//! use kaizen_model::{Metric, Settings};
//!
//! let metrics = compute_metrics_normalized(
//!     &example_products(),
//!     &example_resources(),
//!     &Settings::default(),
//! );
//! assert!(metrics.get(Metric::TfpValueBased).is_computable());
//! ```

mod aggregate;
mod compare;
mod engine;
mod examples;
mod inputs;
mod normalize;
mod numeric;
mod output;

// === Normalizer ===
pub use normalize::{normalize_products, normalize_resources};

// === Output valuator ===
pub use output::{compute_output_std_hours, compute_output_value};

// === Input cost aggregator ===
pub use inputs::{Classifier, categorize_inputs, compute_input_cost};

// === Metrics engine ===
pub use engine::{compute_metrics, compute_metrics_normalized};

// === Kaizen compare ===
pub use compare::{Comparison, ComparisonRow, compare, compare_sets};

// === Multi-period aggregation ===
pub use aggregate::{PeriodMetrics, aggregate};

// === Built-in demo tables ===
pub use examples::{example_products, example_resources};
