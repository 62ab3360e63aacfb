//! CSV and JSON export of result rows.

use std::io::Write;

use anyhow::{Context, Result};

use kaizen_metrics::{Comparison, PeriodMetrics};
use kaizen_model::MetricSet;

use crate::rows::{comparison_rows, metric_rows, period_rows};

/// Write a metric set as `metric,value` CSV rows.
pub fn write_metrics_csv<W: Write>(writer: W, metrics: &MetricSet) -> Result<()> {
    write_rows(writer, &metric_rows(metrics))
}

/// Write a comparison as `metric,before,after,change_abs,change_pct` rows.
pub fn write_comparison_csv<W: Write>(writer: W, comparison: &Comparison) -> Result<()> {
    write_rows(writer, &comparison_rows(comparison))
}

/// Write aggregation results as one wide row per period.
pub fn write_aggregate_csv<W: Write>(writer: W, periods: &[PeriodMetrics]) -> Result<()> {
    write_rows(writer, &period_rows(periods))
}

fn write_rows<W: Write, R: serde::Serialize>(writer: W, rows: &[R]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row).context("write CSV row")?;
    }
    csv_writer.flush().context("flush CSV output")?;
    Ok(())
}

/// Serialize a metric set as pretty JSON rows.
pub fn metrics_json(metrics: &MetricSet) -> Result<String> {
    serde_json::to_string_pretty(&metric_rows(metrics)).context("serialize metrics to JSON")
}

/// Serialize a comparison as pretty JSON rows.
pub fn comparison_json(comparison: &Comparison) -> Result<String> {
    serde_json::to_string_pretty(&comparison_rows(comparison)).context("serialize comparison")
}

/// Serialize aggregation results as pretty JSON rows.
pub fn aggregate_json(periods: &[PeriodMetrics]) -> Result<String> {
    serde_json::to_string_pretty(&period_rows(periods)).context("serialize aggregate")
}
