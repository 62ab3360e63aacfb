//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "kaizen",
    version,
    about = "Productivity & Kaizen analyzer - ratio metrics over product and resource tables",
    long_about = "Compute value-based and standard-hours productivity metrics from\n\
                  product and resource tables: TFP, partial productivity per input\n\
                  category, before/after Kaizen comparison, and multi-period\n\
                  aggregation over long-form datasets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a single-period metric set from product and resource CSVs.
    Metrics(MetricsArgs),

    /// Compare two periods (Kaizen before/after) under identical settings.
    Compare(CompareArgs),

    /// Compute per-period metric sets from a long-form dataset.
    Aggregate(AggregateArgs),

    /// Write the built-in example tables as starter CSV files.
    Example(ExampleArgs),
}

#[derive(Args)]
pub struct MetricsArgs {
    /// Product table CSV (columns: product, quantity[, price, std_hours]).
    #[arg(value_name = "PRODUCTS_CSV")]
    pub products: PathBuf,

    /// Resource table CSV (columns: resource, quantity, unit_cost[, unit, category]).
    #[arg(value_name = "RESOURCES_CSV")]
    pub resources: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Product table CSV for the "before" period.
    #[arg(long = "before-products", value_name = "CSV")]
    pub before_products: PathBuf,

    /// Resource table CSV for the "before" period.
    #[arg(long = "before-resources", value_name = "CSV")]
    pub before_resources: PathBuf,

    /// Product table CSV for the "after" period.
    #[arg(long = "after-products", value_name = "CSV")]
    pub after_products: PathBuf,

    /// Resource table CSV for the "after" period.
    #[arg(long = "after-resources", value_name = "CSV")]
    pub after_resources: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct AggregateArgs {
    /// Long-form dataset CSV with a product/input discriminator column
    /// (`table` or `type`) and an optional `period` column.
    #[arg(value_name = "DATASET_CSV")]
    pub dataset: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct ExampleArgs {
    /// Directory to write the example CSV files into.
    #[arg(long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

/// Computation settings, resolved from an optional JSON file plus flag
/// overrides.
#[derive(Args)]
pub struct SettingsArgs {
    /// Settings JSON file; flags below override its fields.
    #[arg(long = "settings", value_name = "JSON")]
    pub settings_file: Option<PathBuf>,

    /// Disable value-based output (fall back to the quantity-sum proxy).
    #[arg(long = "no-price-output")]
    pub no_price_output: bool,

    /// Also compute output in standard hours (requires std_hours data).
    #[arg(long = "std-hours")]
    pub std_hours: bool,

    /// Divisor converting nominal output value to real output value.
    #[arg(long = "price-deflator", value_name = "N")]
    pub price_deflator: Option<f64>,

    /// Divisor converting nominal input cost to real input cost.
    #[arg(long = "input-deflator", value_name = "N")]
    pub input_deflator: Option<f64>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: FormatArg,

    /// Write the result to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Json,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
