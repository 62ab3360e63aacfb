//! Kaizen before/after comparison.

use kaizen_model::{Metric, MetricSet, MetricValue, RawTable, SchemaError, Settings};

use crate::engine::compute_metrics;

/// One metric's before/after delta.
///
/// `change_pct` is computable only when both sides are computable and the
/// before value is non-zero; a metric missing on either side propagates as
/// not computable, never as zero.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub before: MetricValue,
    pub after: MetricValue,
    pub change_abs: MetricValue,
    pub change_pct: MetricValue,
}

/// A full before/after comparison, rows in the after set's canonical
/// metric order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    pub fn get(&self, metric: Metric) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.metric == metric)
    }
}

/// Run the metrics engine on both periods under identical settings and
/// diff the results.
pub fn compare(
    before_products: &RawTable,
    before_resources: &RawTable,
    after_products: &RawTable,
    after_resources: &RawTable,
    settings: &Settings,
) -> Result<Comparison, SchemaError> {
    let before = compute_metrics(before_products, before_resources, settings)?;
    let after = compute_metrics(after_products, after_resources, settings)?;
    Ok(compare_sets(&before, &after))
}

/// Diff two metric sets, iterating the after set's order.
pub fn compare_sets(before: &MetricSet, after: &MetricSet) -> Comparison {
    let rows = after
        .iter()
        .map(|(metric, after_value)| {
            let before_value = before.get(metric);
            let (change_abs, change_pct) = deltas(before_value, after_value);
            ComparisonRow {
                metric,
                before: before_value,
                after: after_value,
                change_abs,
                change_pct,
            }
        })
        .collect();
    Comparison { rows }
}

fn deltas(before: MetricValue, after: MetricValue) -> (MetricValue, MetricValue) {
    let (Some(before), Some(after)) = (before.value(), after.value()) else {
        return (MetricValue::NotComputable, MetricValue::NotComputable);
    };
    let change_abs = MetricValue::Value(after - before);
    let change_pct = if before.abs() > 0.0 {
        MetricValue::Value((after / before - 1.0) * 100.0)
    } else {
        MetricValue::NotComputable
    };
    (change_abs, change_pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaizen_model::CellValue;

    fn tables(price: &str) -> (RawTable, RawTable) {
        let products = RawTable::from_rows(vec![vec![
            ("product", CellValue::from("A")),
            ("quantity", CellValue::from("1000")),
            ("price", CellValue::from(price)),
        ]]);
        let resources = RawTable::from_rows(vec![vec![
            ("resource", CellValue::from("Labor")),
            ("quantity", CellValue::from("100")),
            ("unit_cost", CellValue::from("50")),
        ]]);
        (products, resources)
    }

    #[test]
    fn comparing_a_period_against_itself_yields_zero_change() {
        let (products, resources) = tables("50");
        let comparison =
            compare(&products, &resources, &products, &resources, &Settings::default())
                .expect("compare");
        for row in &comparison.rows {
            if row.before.is_computable() && row.before.value() != Some(0.0) {
                assert_eq!(row.change_abs, MetricValue::Value(0.0), "{}", row.metric);
                assert_eq!(row.change_pct, MetricValue::Value(0.0), "{}", row.metric);
            }
        }
    }

    #[test]
    fn tfp_improvement_reports_absolute_and_percent_change() {
        // TFP before: 50000/5000 = 10, after: 60000/5000 = 12.
        let (before_products, before_resources) = tables("50");
        let (after_products, after_resources) = tables("60");
        let comparison = compare(
            &before_products,
            &before_resources,
            &after_products,
            &after_resources,
            &Settings::default(),
        )
        .expect("compare");
        let row = comparison.get(Metric::TfpValueBased).expect("tfp row");
        assert_eq!(row.before, MetricValue::Value(10.0));
        assert_eq!(row.after, MetricValue::Value(12.0));
        assert_eq!(row.change_abs, MetricValue::Value(2.0));
        assert_eq!(row.change_pct, MetricValue::Value(20.0));
    }

    #[test]
    fn not_computable_sides_poison_the_deltas() {
        let not = MetricValue::NotComputable;
        assert_eq!(deltas(not, MetricValue::Value(5.0)), (not, not));
        assert_eq!(deltas(MetricValue::Value(5.0), not), (not, not));
    }

    #[test]
    fn zero_before_blocks_percent_change_only() {
        let (abs, pct) = deltas(MetricValue::Value(0.0), MetricValue::Value(5.0));
        assert_eq!(abs, MetricValue::Value(5.0));
        assert_eq!(pct, MetricValue::NotComputable);
    }

    #[test]
    fn rows_follow_canonical_metric_order() {
        let (products, resources) = tables("50");
        let comparison =
            compare(&products, &resources, &products, &resources, &Settings::default())
                .expect("compare");
        let order: Vec<Metric> = comparison.rows.iter().map(|row| row.metric).collect();
        assert_eq!(order, Metric::ALL);
    }
}
