//! The fixed metric vocabulary and the not-computable marker.

use std::fmt;

/// A named productivity metric.
///
/// The vocabulary is fixed; `Metric::ALL` gives the canonical ordering used
/// everywhere a metric set is displayed or serialized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Metric {
    #[serde(rename = "gross_output_value")]
    GrossOutputValue,
    #[serde(rename = "real_output_value")]
    RealOutputValue,
    #[serde(rename = "std_hours_output")]
    StdHoursOutput,
    #[serde(rename = "total_input_cost")]
    TotalInputCost,
    #[serde(rename = "real_input_cost")]
    RealInputCost,
    #[serde(rename = "TFP_value_based")]
    TfpValueBased,
    #[serde(rename = "PP_labor")]
    PpLabor,
    #[serde(rename = "PP_machine")]
    PpMachine,
    #[serde(rename = "PP_materials")]
    PpMaterials,
    #[serde(rename = "PP_energy")]
    PpEnergy,
    #[serde(rename = "PP_overhead")]
    PpOverhead,
    #[serde(rename = "Productivity_per_std_hour")]
    ProductivityPerStdHour,
}

impl Metric {
    /// All metrics in canonical order.
    pub const ALL: [Self; 12] = [
        Self::GrossOutputValue,
        Self::RealOutputValue,
        Self::StdHoursOutput,
        Self::TotalInputCost,
        Self::RealInputCost,
        Self::TfpValueBased,
        Self::PpLabor,
        Self::PpMachine,
        Self::PpMaterials,
        Self::PpEnergy,
        Self::PpOverhead,
        Self::ProductivityPerStdHour,
    ];

    /// Wire name, matching the original report vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GrossOutputValue => "gross_output_value",
            Self::RealOutputValue => "real_output_value",
            Self::StdHoursOutput => "std_hours_output",
            Self::TotalInputCost => "total_input_cost",
            Self::RealInputCost => "real_input_cost",
            Self::TfpValueBased => "TFP_value_based",
            Self::PpLabor => "PP_labor",
            Self::PpMachine => "PP_machine",
            Self::PpMaterials => "PP_materials",
            Self::PpEnergy => "PP_energy",
            Self::PpOverhead => "PP_overhead",
            Self::ProductivityPerStdHour => "Productivity_per_std_hour",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric value, or the marker for "no meaningful result".
///
/// `NotComputable` is a first-class value, distinct from zero. It arises
/// from absent denominators (a category with no cost, no standard-hours
/// data) and must survive comparison, aggregation, and serialization as a
/// missing value, never as `0`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Value(f64),
    NotComputable,
}

impl MetricValue {
    /// The numeric value, or `None` when not computable.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::NotComputable => None,
        }
    }

    pub fn is_computable(self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Wrap an optional number, mapping `None` to `NotComputable`.
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Self::NotComputable, Self::Value)
    }

    /// Divide `numerator` by `denominator`, or `NotComputable` when the
    /// denominator is zero.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Self::NotComputable
        } else {
            Self::Value(numerator / denominator)
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

/// The full metric vocabulary with one value per metric, in canonical
/// order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetricSet {
    entries: Vec<(Metric, MetricValue)>,
}

impl MetricSet {
    /// Build a set by evaluating `f` for every metric in canonical order.
    pub fn build(mut f: impl FnMut(Metric) -> MetricValue) -> Self {
        Self {
            entries: Metric::ALL.into_iter().map(|m| (m, f(m))).collect(),
        }
    }

    pub fn get(&self, metric: Metric) -> MetricValue {
        self.entries
            .iter()
            .find(|(m, _)| *m == metric)
            .map_or(MetricValue::NotComputable, |(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, MetricValue)> + '_ {
        self.entries.iter().copied()
    }
}
