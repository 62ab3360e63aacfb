//! The metrics engine: combine valuation and cost aggregates into the
//! fixed metric vocabulary.

use tracing::debug;

use kaizen_model::{
    Metric, MetricSet, MetricValue, ProductTable, RawTable, ResourceTable, SchemaError, Settings,
};

use crate::inputs::{Classifier, categorize_inputs, compute_input_cost};
use crate::normalize::{normalize_products, normalize_resources};
use crate::output::{compute_output_std_hours, compute_output_value};

/// Compute the full metric set from raw tables.
///
/// Normalizes both tables first; the only error surface is a missing
/// required column.
pub fn compute_metrics(
    products: &RawTable,
    resources: &RawTable,
    settings: &Settings,
) -> Result<MetricSet, SchemaError> {
    let products = normalize_products(products)?;
    let resources = normalize_resources(resources)?;
    Ok(compute_metrics_normalized(&products, &resources, settings))
}

/// Compute the full metric set from already-normalized tables.
///
/// Pure and infallible: any denominator that is zero or absent yields
/// [`MetricValue::NotComputable`] for the affected metric, never an error.
pub fn compute_metrics_normalized(
    products: &ProductTable,
    resources: &ResourceTable,
    settings: &Settings,
) -> MetricSet {
    let gross_output = compute_output_value(products, settings.use_price_output);
    let std_hours_output = if settings.use_standard_hour_output {
        compute_output_std_hours(products)
    } else {
        None
    };

    let input_cost = compute_input_cost(resources);
    let category_totals = categorize_inputs(resources, &Classifier::default());

    let real_output = Settings::deflate(gross_output, settings.price_deflator);
    let real_input_cost = Settings::deflate(input_cost, settings.input_deflator);

    debug!(
        gross_output,
        real_output, input_cost, real_input_cost, "metric aggregates computed"
    );

    // Partial productivity denominators are cost-based: putting labor
    // hours in quantity and the wage in unit_cost makes PP_labor an
    // hours-consistent measure.
    MetricSet::build(|metric| match metric {
        Metric::GrossOutputValue => gross_output.into(),
        Metric::RealOutputValue => real_output.into(),
        Metric::StdHoursOutput => MetricValue::from_option(std_hours_output),
        Metric::TotalInputCost => input_cost.into(),
        Metric::RealInputCost => real_input_cost.into(),
        Metric::TfpValueBased => MetricValue::ratio(real_output, real_input_cost),
        Metric::PpLabor => MetricValue::ratio(real_output, category_totals.labor),
        Metric::PpMachine => MetricValue::ratio(real_output, category_totals.machine),
        Metric::PpMaterials => MetricValue::ratio(real_output, category_totals.materials),
        Metric::PpEnergy => MetricValue::ratio(real_output, category_totals.energy),
        Metric::PpOverhead => MetricValue::ratio(real_output, category_totals.overhead),
        Metric::ProductivityPerStdHour => match std_hours_output {
            Some(hours) if hours > 0.0 => MetricValue::Value(real_output / hours),
            _ => MetricValue::NotComputable,
        },
    })
}
