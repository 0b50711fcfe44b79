//! Logging setup for the skuboard binary.
//!
//! One subscriber, installed once at startup. Warnings about degraded
//! source data go to stderr by default; `--log-file` redirects them to an
//! append-only file and `--log-format json` switches to machine-readable
//! lines.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// Single-line human-readable output.
    Compact,
    /// One JSON object per line.
    Json,
}

/// Logging decisions the binary derives from its flags. Timestamps and
/// module targets are always off; an interactive report tool has no use
/// for either.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Most verbose level to emit.
    pub max_level: LevelFilter,
    /// Whether `RUST_LOG` may override `max_level`. False once the user
    /// pins a level with `-v`/`-q` or `--log-level`.
    pub honor_rust_log: bool,
    pub format: LogFormat,
    /// ANSI colors in the human-readable formats.
    pub ansi: bool,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

/// Install the global subscriber. Panics if one is already installed, so
/// call it exactly once, before any command runs.
///
/// # Errors
///
/// Fails when the log file cannot be opened for appending.
pub fn init(options: &LogOptions) -> io::Result<()> {
    let writer = match &options.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Arc::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    let builder = fmt()
        .with_env_filter(env_filter(options))
        .with_writer(writer)
        .with_ansi(options.ansi)
        .with_target(false)
        .without_time();
    match options.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}

fn env_filter(options: &LogOptions) -> EnvFilter {
    if options.honor_rust_log
        && let Ok(from_env) = EnvFilter::try_from_default_env()
    {
        return from_env;
    }
    EnvFilter::new(options.max_level.to_string().to_lowercase())
}
