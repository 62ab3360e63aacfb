//! Productivity & Kaizen analyzer CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use kaizen_cli::cli::{Cli, Command, LogFormatArg};
use kaizen_cli::commands::{emit, run_aggregate, run_compare, run_example, run_metrics};
use kaizen_cli::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Metrics(args) => run_metrics(args).and_then(|out| emit(&out, args.output.output.as_ref())),
        Command::Compare(args) => run_compare(args).and_then(|out| emit(&out, args.output.output.as_ref())),
        Command::Aggregate(args) => {
            run_aggregate(args).and_then(|out| emit(&out, args.output.output.as_ref()))
        }
        Command::Example(args) => run_example(args).and_then(|out| emit(&out, None)),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
