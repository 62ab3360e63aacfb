//! Serializable long-form and wide-form row shapes.
//!
//! The core hands back metric sets; these row types are the flat shapes a
//! caller exports. Not-computable values serialize as `None` (an empty CSV
//! cell, JSON `null`), never as zero.

use kaizen_metrics::{Comparison, PeriodMetrics};
use kaizen_model::{Metric, MetricSet};

/// One `{metric, value}` row of a single-period result.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub value: Option<f64>,
}

/// A metric set as long-form rows in canonical order.
pub fn metric_rows(metrics: &MetricSet) -> Vec<MetricRow> {
    metrics
        .iter()
        .map(|(metric, value)| MetricRow {
            metric,
            value: value.value(),
        })
        .collect()
}

/// One metric's before/after row of a Kaizen comparison.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonCsvRow {
    pub metric: Metric,
    pub before: Option<f64>,
    pub after: Option<f64>,
    pub change_abs: Option<f64>,
    pub change_pct: Option<f64>,
}

/// A comparison as long-form rows.
pub fn comparison_rows(comparison: &Comparison) -> Vec<ComparisonCsvRow> {
    comparison
        .rows
        .iter()
        .map(|row| ComparisonCsvRow {
            metric: row.metric,
            before: row.before.value(),
            after: row.after.value(),
            change_abs: row.change_abs.value(),
            change_pct: row.change_pct.value(),
        })
        .collect()
}

/// One period's full metric set as a wide row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PeriodRow {
    pub period: String,
    pub gross_output_value: Option<f64>,
    pub real_output_value: Option<f64>,
    pub std_hours_output: Option<f64>,
    pub total_input_cost: Option<f64>,
    pub real_input_cost: Option<f64>,
    #[serde(rename = "TFP_value_based")]
    pub tfp_value_based: Option<f64>,
    #[serde(rename = "PP_labor")]
    pub pp_labor: Option<f64>,
    #[serde(rename = "PP_machine")]
    pub pp_machine: Option<f64>,
    #[serde(rename = "PP_materials")]
    pub pp_materials: Option<f64>,
    #[serde(rename = "PP_energy")]
    pub pp_energy: Option<f64>,
    #[serde(rename = "PP_overhead")]
    pub pp_overhead: Option<f64>,
    #[serde(rename = "Productivity_per_std_hour")]
    pub productivity_per_std_hour: Option<f64>,
}

/// Aggregation results as one wide row per period.
pub fn period_rows(periods: &[PeriodMetrics]) -> Vec<PeriodRow> {
    periods
        .iter()
        .map(|entry| {
            let value = |metric: Metric| entry.metrics.get(metric).value();
            PeriodRow {
                period: entry.period.clone(),
                gross_output_value: value(Metric::GrossOutputValue),
                real_output_value: value(Metric::RealOutputValue),
                std_hours_output: value(Metric::StdHoursOutput),
                total_input_cost: value(Metric::TotalInputCost),
                real_input_cost: value(Metric::RealInputCost),
                tfp_value_based: value(Metric::TfpValueBased),
                pp_labor: value(Metric::PpLabor),
                pp_machine: value(Metric::PpMachine),
                pp_materials: value(Metric::PpMaterials),
                pp_energy: value(Metric::PpEnergy),
                pp_overhead: value(Metric::PpOverhead),
                productivity_per_std_hour: value(Metric::ProductivityPerStdHour),
            }
        })
        .collect()
}
