//! Integration tests for the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use kaizen_cli::cli::{
    AggregateArgs, CompareArgs, ExampleArgs, FormatArg, MetricsArgs, OutputArgs, SettingsArgs,
};
use kaizen_cli::commands::{run_aggregate, run_compare, run_example, run_metrics};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn default_settings() -> SettingsArgs {
    SettingsArgs {
        settings_file: None,
        no_price_output: false,
        std_hours: false,
        price_deflator: None,
        input_deflator: None,
    }
}

fn output(format: FormatArg) -> OutputArgs {
    OutputArgs {
        format,
        output: None,
    }
}

#[test]
fn metrics_command_computes_scenario_values() {
    let dir = TempDir::new().expect("temp dir");
    let products = write_file(dir.path(), "products.csv", "product,quantity,price\nA,1000,50\n");
    let resources = write_file(
        dir.path(),
        "resources.csv",
        "resource,quantity,unit_cost\nLabor,120,6\n",
    );
    let args = MetricsArgs {
        products,
        resources,
        settings: default_settings(),
        output: output(FormatArg::Csv),
    };
    let out = run_metrics(&args).expect("run metrics");
    assert!(out.starts_with("metric,value\n"));
    assert!(out.contains("gross_output_value,50000.0"));
    assert!(out.contains("total_input_cost,720.0"));
    assert!(out.contains("TFP_value_based,69.4444"));
    // Only labor carries cost; the other partials are empty cells.
    assert!(out.contains("PP_machine,\n"));
}

#[test]
fn metrics_command_applies_settings_file_and_overrides() {
    let dir = TempDir::new().expect("temp dir");
    let products = write_file(
        dir.path(),
        "products.csv",
        "product,quantity,price,std_hours\nA,1000,50,0.2\n",
    );
    let resources = write_file(
        dir.path(),
        "resources.csv",
        "resource,quantity,unit_cost\nLabor,120,6\n",
    );
    let settings_file = write_file(
        dir.path(),
        "settings.json",
        r#"{"use_standard_hour_output": true, "price_deflator": 2.0}"#,
    );
    let args = MetricsArgs {
        products,
        resources,
        settings: SettingsArgs {
            settings_file: Some(settings_file),
            no_price_output: false,
            std_hours: false,
            price_deflator: None,
            input_deflator: None,
        },
        output: output(FormatArg::Csv),
    };
    let out = run_metrics(&args).expect("run metrics");
    assert!(out.contains("real_output_value,25000.0"));
    assert!(out.contains("std_hours_output,200.0"));
    assert!(out.contains("Productivity_per_std_hour,125.0"));
}

#[test]
fn metrics_command_reports_missing_columns() {
    let dir = TempDir::new().expect("temp dir");
    let products = write_file(dir.path(), "products.csv", "name,qty\nA,1000\n");
    let resources = write_file(
        dir.path(),
        "resources.csv",
        "resource,quantity,unit_cost\nLabor,120,6\n",
    );
    let args = MetricsArgs {
        products,
        resources,
        settings: default_settings(),
        output: output(FormatArg::Table),
    };
    let error = run_metrics(&args).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("products table missing required column(s): product, quantity"));
}

#[test]
fn compare_command_reports_tfp_improvement() {
    let dir = TempDir::new().expect("temp dir");
    let before_products =
        write_file(dir.path(), "bp.csv", "product,quantity,price\nA,1000,50\n");
    let after_products =
        write_file(dir.path(), "ap.csv", "product,quantity,price\nA,1000,60\n");
    let resources_text = "resource,quantity,unit_cost\nLabor,100,50\n";
    let before_resources = write_file(dir.path(), "br.csv", resources_text);
    let after_resources = write_file(dir.path(), "ar.csv", resources_text);
    let args = CompareArgs {
        before_products,
        before_resources,
        after_products,
        after_resources,
        settings: default_settings(),
        output: output(FormatArg::Csv),
    };
    let out = run_compare(&args).expect("run compare");
    assert!(out.starts_with("metric,before,after,change_abs,change_pct\n"));
    assert!(out.contains("TFP_value_based,10.0,12.0,2.0,20.0"));
}

#[test]
fn aggregate_command_emits_one_row_per_period() {
    let dir = TempDir::new().expect("temp dir");
    let dataset = write_file(
        dir.path(),
        "dataset.csv",
        "period,table,product,resource,quantity,price,unit_cost\n\
         2024,product,A,,1000,50,\n\
         2024,input,,Labor,120,,6\n\
         2025,product,A,,1200,50,\n\
         2025,input,,Labor,110,,6\n",
    );
    let args = AggregateArgs {
        dataset,
        settings: default_settings(),
        output: output(FormatArg::Csv),
    };
    let out = run_aggregate(&args).expect("run aggregate");
    let mut lines = out.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("period,gross_output_value"));
    assert!(lines.next().expect("2024 row").starts_with("2024,50000.0"));
    assert!(lines.next().expect("2025 row").starts_with("2025,60000.0"));
    assert_eq!(lines.next(), None);
}

#[test]
fn example_command_writes_loadable_tables() {
    let dir = TempDir::new().expect("temp dir");
    let args = ExampleArgs {
        dir: dir.path().to_path_buf(),
    };
    let summary = run_example(&args).expect("run example");
    assert!(summary.contains("example_products.csv"));

    // The generated files must round-trip through the metrics command.
    let metrics_args = MetricsArgs {
        products: dir.path().join("example_products.csv"),
        resources: dir.path().join("example_resources.csv"),
        settings: default_settings(),
        output: output(FormatArg::Csv),
    };
    let out = run_metrics(&metrics_args).expect("run metrics on examples");
    assert!(out.contains("gross_output_value,138000.0"));
    assert!(out.contains("total_input_cost,49220.0"));
}

#[test]
fn table_format_renders_the_full_vocabulary() {
    let dir = TempDir::new().expect("temp dir");
    let products = write_file(dir.path(), "products.csv", "product,quantity,price\nA,1000,50\n");
    let resources = write_file(
        dir.path(),
        "resources.csv",
        "resource,quantity,unit_cost\nLabor,120,6\n",
    );
    let args = MetricsArgs {
        products,
        resources,
        settings: default_settings(),
        output: output(FormatArg::Table),
    };
    let out = run_metrics(&args).expect("run metrics");
    assert!(out.contains("gross_output_value"));
    assert!(out.contains("PP_overhead"));
    assert!(out.contains("n/a"));
    assert!(out.contains("69.4444"));
}
