//! SKU board CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use skuboard_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use skuboard_cli::commands::{run_dates, run_report, run_skus, run_sources};
use skuboard_cli::logging::{self, LogFormat, LogOptions};
use skuboard_cli::summary::print_report;
use skuboard_cli::types::ReportResult;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = logging::init(&logging_options(&cli)) {
        eprintln!("error: cannot set up logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Report(args) => {
            run_report(&args).and_then(|result| render_report(args.format, &result))
        }
        Command::Dates(args) => run_dates(&args),
        Command::Skus(args) => run_skus(&args),
        Command::Sources => {
            run_sources();
            Ok(())
        }
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn render_report(format: ReportFormatArg, result: &ReportResult) -> Result<()> {
    match format {
        ReportFormatArg::Table => print_report(result),
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Map the logging flags onto [`LogOptions`]. An explicit `--log-level`
/// beats the `-v`/`-q` count, and either one disables `RUST_LOG`.
fn logging_options(cli: &Cli) -> LogOptions {
    let pinned = cli.log_level.map(|level| match level {
        LogLevelArg::Error => LevelFilter::ERROR,
        LogLevelArg::Warn => LevelFilter::WARN,
        LogLevelArg::Info => LevelFilter::INFO,
        LogLevelArg::Debug => LevelFilter::DEBUG,
        LogLevelArg::Trace => LevelFilter::TRACE,
    });
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogOptions {
        max_level: pinned.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        honor_rust_log: pinned.is_none() && !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        ansi,
        file: cli.log_file.clone(),
    }
}
