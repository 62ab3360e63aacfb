//! Terminal presentation of result tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use kaizen_metrics::{Comparison, PeriodMetrics};
use kaizen_model::{Metric, MetricSet, MetricValue};

/// Placeholder shown for not-computable values.
const NOT_COMPUTABLE: &str = "n/a";

/// Render a single-period metric set.
pub fn render_metrics(metrics: &MetricSet) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    align_right(&mut table, 1);
    for (metric, value) in metrics.iter() {
        table.add_row(vec![Cell::new(metric), value_cell(value)]);
    }
    table
}

/// Render a Kaizen before/after comparison.
pub fn render_comparison(comparison: &Comparison) -> Table {
    let mut table = new_table(vec!["Metric", "Before", "After", "Change", "Change %"]);
    for column in 1..=4 {
        align_right(&mut table, column);
    }
    for row in &comparison.rows {
        table.add_row(vec![
            Cell::new(row.metric),
            value_cell(row.before),
            value_cell(row.after),
            value_cell(row.change_abs),
            value_cell(row.change_pct),
        ]);
    }
    table
}

/// Render aggregation results, one row per period.
pub fn render_aggregate(periods: &[PeriodMetrics]) -> Table {
    let mut headers = vec!["Period".to_owned()];
    headers.extend(Metric::ALL.into_iter().map(|metric| metric.to_string()));
    let mut table = new_table(headers);
    for column in 1..=Metric::ALL.len() {
        align_right(&mut table, column);
    }
    for entry in periods {
        let mut cells = vec![Cell::new(&entry.period)];
        cells.extend(entry.metrics.iter().map(|(_, value)| value_cell(value)));
        table.add_row(cells);
    }
    table
}

/// Format a value for display: up to four decimals, trailing zeros
/// trimmed.
pub fn format_value(value: f64) -> String {
    let text = format!("{value:.4}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn new_table<T: Into<Vec<H>>, H: Into<Cell>>(headers: T) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .into()
            .into_iter()
            .map(|header| header.into().add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn align_right(table: &mut Table, index: usize) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn value_cell(value: MetricValue) -> Cell {
    match value {
        MetricValue::Value(value) => Cell::new(format_value(value)),
        MetricValue::NotComputable => Cell::new(NOT_COMPUTABLE).add_attribute(Attribute::Dim),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaizen_metrics::compute_metrics_normalized;
    use kaizen_model::{ProductRow, ProductTable, ResourceRow, ResourceTable, Settings};

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(69.4444444), "69.4444");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-3.1000), "-3.1");
    }

    #[test]
    fn metrics_table_lists_full_vocabulary() {
        let products = ProductTable::new(vec![ProductRow {
            product: "A".to_owned(),
            quantity: 10.0,
            price: Some(5.0),
            std_hours: None,
        }]);
        let resources = ResourceTable::new(vec![ResourceRow {
            resource: "Labor".to_owned(),
            quantity: 2.0,
            unit_cost: 5.0,
            unit: "hours".to_owned(),
            category: None,
        }]);
        let metrics = compute_metrics_normalized(&products, &resources, &Settings::default());
        let rendered = render_metrics(&metrics).to_string();
        assert!(rendered.contains("gross_output_value"));
        assert!(rendered.contains("Productivity_per_std_hour"));
        assert!(rendered.contains(NOT_COMPUTABLE));
        assert!(rendered.contains("50"));
    }
}
