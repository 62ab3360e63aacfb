//! Multi-period / multi-entity aggregation over a long-form dataset.
//!
//! The dataset tags every row with a discriminator column (`table`, alias
//! `type`) holding `product` or `input`, plus an optional `period` key.
//! Rows are grouped by period; within a group, product and input rows form
//! the two sub-tables fed to the metrics engine. A `company` column may be
//! present and is deliberately not grouped on: aggregation sums across
//! companies within a period.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use kaizen_model::{MetricSet, RawRow, RawTable, SchemaError, Settings, TableKind};

use crate::engine::compute_metrics_normalized;
use crate::examples::{example_products, example_resources};
use crate::normalize::{normalize_products, normalize_resources};

/// Period label used for rows without a `period` cell.
const DEFAULT_PERIOD: &str = "ALL";

/// One period's computed metric set.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PeriodMetrics {
    pub period: String,
    pub metrics: MetricSet,
}

/// Group a long-form dataset by period and compute each group's metrics
/// independently.
///
/// Periods come back in sorted order. A group with no product rows (or no
/// input rows) falls back to the built-in example table - a documented
/// default carried from the original tool, logged as a warning so the
/// substitution is never silent.
pub fn aggregate(dataset: &RawTable, settings: &Settings) -> Result<Vec<PeriodMetrics>, SchemaError> {
    let discriminator = ["table", "type"]
        .into_iter()
        .find(|column| dataset.has_column(column))
        .ok_or_else(|| SchemaError::MissingColumns {
            table: TableKind::Dataset,
            columns: vec!["table".to_owned()],
        })?;

    let mut groups: BTreeMap<String, (Vec<RawRow>, Vec<RawRow>)> = BTreeMap::new();
    for row in &dataset.rows {
        let period = dataset
            .cell(row, "period")
            .unwrap_or(DEFAULT_PERIOD)
            .trim()
            .to_owned();
        let group = groups.entry(period).or_default();
        match dataset.cell(row, discriminator).map(str::trim) {
            Some(kind) if kind.eq_ignore_ascii_case("product") => group.0.push(row.clone()),
            Some(kind) if kind.eq_ignore_ascii_case("input") => group.1.push(row.clone()),
            other => debug!(kind = ?other, "dataset row with unknown discriminator skipped"),
        }
    }

    let mut results = Vec::with_capacity(groups.len());
    for (period, (product_rows, input_rows)) in groups {
        let products = if product_rows.is_empty() {
            warn!(period, "no product rows in group; using built-in example table");
            example_products()
        } else {
            normalize_products(&sub_table(dataset, product_rows, &PRODUCT_COLUMNS))?
        };
        let resources = if input_rows.is_empty() {
            warn!(period, "no input rows in group; using built-in example table");
            example_resources()
        } else {
            normalize_resources(&sub_table(dataset, input_rows, &RESOURCE_COLUMNS))?
        };
        let metrics = compute_metrics_normalized(&products, &resources, settings);
        results.push(PeriodMetrics { period, metrics });
    }
    Ok(results)
}

const PRODUCT_COLUMNS: [&str; 4] = ["product", "quantity", "price", "std_hours"];
const RESOURCE_COLUMNS: [&str; 5] = ["resource", "quantity", "unit_cost", "unit", "category"];

/// Project a group's rows onto the schema columns the dataset declares.
fn sub_table(dataset: &RawTable, rows: Vec<RawRow>, schema: &[&str]) -> RawTable {
    let columns: Vec<String> = schema
        .iter()
        .filter(|column| dataset.has_column(column))
        .map(|column| (*column).to_owned())
        .collect();
    let rows = rows
        .into_iter()
        .map(|mut row| {
            row.retain(|column, _| columns.iter().any(|keep| keep == column));
            row
        })
        .collect();
    RawTable { columns, rows }
}
