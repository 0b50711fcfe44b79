//! CLI argument definitions for the SKU board.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "skuboard",
    version,
    about = "SKU board - align sales, production, stock, demand, norms and lead time",
    long_about = "Resolve six aligned metrics for one date and SKU from six\n\
                  independently-shaped CSV sources. Missing keys, missing columns,\n\
                  and malformed cells degrade to per-field defaults instead of\n\
                  failing the report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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
    /// Resolve the six-metric summary for one date and SKU.
    Report(ReportArgs),

    /// List the selectable dates from the sales table.
    Dates(DomainArgs),

    /// List the selectable SKU codes from the sales table.
    Skus(DomainArgs),

    /// List the six expected source files and their required columns.
    Sources,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Folder containing the six source CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Date to report on, YYYY-MM-DD (default: first selectable date).
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// SKU code to report on (default: first selectable code).
    #[arg(long = "sku", value_name = "CODE")]
    pub sku: Option<String>,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Override the sales CSV path.
    #[arg(long = "sales", value_name = "PATH")]
    pub sales: Option<PathBuf>,

    /// Override the production CSV path.
    #[arg(long = "production", value_name = "PATH")]
    pub production: Option<PathBuf>,

    /// Override the stock CSV path.
    #[arg(long = "stock", value_name = "PATH")]
    pub stock: Option<PathBuf>,

    /// Override the demand CSV path.
    #[arg(long = "demand", value_name = "PATH")]
    pub demand: Option<PathBuf>,

    /// Override the norms CSV path.
    #[arg(long = "norms", value_name = "PATH")]
    pub norms: Option<PathBuf>,

    /// Override the lead time CSV path.
    #[arg(long = "lead-time", value_name = "PATH")]
    pub lead_time: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DomainArgs {
    /// Folder containing the six source CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Override the sales CSV path.
    #[arg(long = "sales", value_name = "PATH")]
    pub sales: Option<PathBuf>,
}

/// Report output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
