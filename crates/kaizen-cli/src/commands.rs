//! Command implementations.
//!
//! Each command returns its rendered output as a string; `main` decides
//! whether that goes to stdout or to a file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use kaizen_ingest::read_raw_table;
use kaizen_metrics::{
    Comparison, PeriodMetrics, aggregate, compare_sets, compute_metrics_normalized,
    example_products, example_resources, normalize_products, normalize_resources,
};
use kaizen_model::{MetricSet, RawTable, Settings, input_fingerprint};
use kaizen_report::{
    aggregate_json, comparison_json, metrics_json, render_aggregate, render_comparison,
    render_metrics, write_aggregate_csv, write_comparison_csv, write_metrics_csv,
};

use crate::cli::{AggregateArgs, CompareArgs, ExampleArgs, FormatArg, MetricsArgs, SettingsArgs};

pub fn run_metrics(args: &MetricsArgs) -> Result<String> {
    let settings = resolve_settings(&args.settings)?;
    let metrics = load_and_compute(&args.products, &args.resources, &settings)?;
    info!("computed single-period metric set");
    match args.output.format {
        FormatArg::Table => Ok(render_metrics(&metrics).to_string()),
        FormatArg::Csv => {
            let mut buffer = Vec::new();
            write_metrics_csv(&mut buffer, &metrics)?;
            bytes_to_string(buffer)
        }
        FormatArg::Json => metrics_json(&metrics),
    }
}

pub fn run_compare(args: &CompareArgs) -> Result<String> {
    let settings = resolve_settings(&args.settings)?;
    let before = load_and_compute(&args.before_products, &args.before_resources, &settings)?;
    let after = load_and_compute(&args.after_products, &args.after_resources, &settings)?;
    let comparison: Comparison = compare_sets(&before, &after);
    info!("compared before/after periods");
    match args.output.format {
        FormatArg::Table => Ok(render_comparison(&comparison).to_string()),
        FormatArg::Csv => {
            let mut buffer = Vec::new();
            write_comparison_csv(&mut buffer, &comparison)?;
            bytes_to_string(buffer)
        }
        FormatArg::Json => comparison_json(&comparison),
    }
}

pub fn run_aggregate(args: &AggregateArgs) -> Result<String> {
    let settings = resolve_settings(&args.settings)?;
    let dataset = load_table(&args.dataset)?;
    let periods: Vec<PeriodMetrics> = aggregate(&dataset, &settings)?;
    info!(periods = periods.len(), "aggregated long-form dataset");
    match args.output.format {
        FormatArg::Table => Ok(render_aggregate(&periods).to_string()),
        FormatArg::Csv => {
            let mut buffer = Vec::new();
            write_aggregate_csv(&mut buffer, &periods)?;
            bytes_to_string(buffer)
        }
        FormatArg::Json => aggregate_json(&periods),
    }
}

pub fn run_example(args: &ExampleArgs) -> Result<String> {
    fs::create_dir_all(&args.dir)
        .with_context(|| format!("create directory {}", args.dir.display()))?;
    let products_path = args.dir.join("example_products.csv");
    let resources_path = args.dir.join("example_resources.csv");
    write_example_products(&products_path)?;
    write_example_resources(&resources_path)?;
    Ok(format!(
        "wrote {}\nwrote {}",
        products_path.display(),
        resources_path.display()
    ))
}

/// Write command output to the requested destination.
pub fn emit(output: &str, destination: Option<&PathBuf>) -> Result<()> {
    match destination {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("write output to {}", path.display())),
        None => {
            println!("{output}");
            Ok(())
        }
    }
}

fn load_and_compute(
    products_path: &Path,
    resources_path: &Path,
    settings: &Settings,
) -> Result<MetricSet> {
    let products_raw = load_table(products_path)?;
    let resources_raw = load_table(resources_path)?;
    let products = normalize_products(&products_raw)?;
    let resources = normalize_resources(&resources_raw)?;
    let fingerprint = input_fingerprint(&products, &resources, settings);
    debug!(%fingerprint, "inputs normalized");
    Ok(compute_metrics_normalized(&products, &resources, settings))
}

fn load_table(path: &Path) -> Result<RawTable> {
    read_raw_table(path).with_context(|| format!("load table {}", path.display()))
}

/// Resolve settings: JSON file first (when given), then flag overrides.
fn resolve_settings(args: &SettingsArgs) -> Result<Settings> {
    let mut settings = match &args.settings_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read settings file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse settings file {}", path.display()))?
        }
        None => Settings::default(),
    };
    if args.no_price_output {
        settings.use_price_output = false;
    }
    if args.std_hours {
        settings.use_standard_hour_output = true;
    }
    if let Some(deflator) = args.price_deflator {
        settings.price_deflator = Some(deflator);
    }
    if let Some(deflator) = args.input_deflator {
        settings.input_deflator = Some(deflator);
    }
    Ok(settings)
}

fn write_example_products(path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["product", "quantity", "price", "std_hours"])?;
    for row in &example_products().rows {
        writer.write_record([
            row.product.clone(),
            format_number(row.quantity),
            row.price.map(format_number).unwrap_or_default(),
            row.std_hours.map(format_number).unwrap_or_default(),
        ])?;
    }
    writer.flush().context("flush example products")?;
    Ok(())
}

fn write_example_resources(path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["resource", "quantity", "unit_cost", "unit"])?;
    for row in &example_resources().rows {
        writer.write_record([
            row.resource.clone(),
            format_number(row.quantity),
            format_number(row.unit_cost),
            row.unit.clone(),
        ])?;
    }
    writer.flush().context("flush example resources")?;
    Ok(())
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn bytes_to_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).context("CSV output is not valid UTF-8")
}
