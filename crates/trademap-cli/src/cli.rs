//! CLI argument definitions for the trade mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trademap",
    version,
    about = "Trade record mapper - translate bank trade files into a system model",
    long_about = "Translate bank-specific trade records into a canonical system model.\n\n\
                  A mapping config (JSON) names source and target fields and the\n\
                  transformation applied to each. Output records are validated against\n\
                  the system model (JSON) the config references."
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

    /// Allow record values in logs. Values are redacted by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a CSV or JSON file of bank records.
    Transform(TransformArgs),

    /// List the fields of a sample CSV file's header.
    Sample(SampleArgs),

    /// Check a mapping config against its system model.
    Check(CheckArgs),

    /// List the supported transformation operators.
    Operators,
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Mapping config (JSON).
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// System model (JSON).
    #[arg(long = "model", value_name = "FILE")]
    pub model: PathBuf,

    /// Input records: `.json` (object or array) or CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write transformed records here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fail records on type mismatches instead of reporting warnings.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Skip enum membership checks.
    #[arg(long = "no-enum-check")]
    pub no_enum_check: bool,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Sample CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print field definitions as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Mapping config (JSON).
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// System model (JSON).
    #[arg(long = "model", value_name = "FILE")]
    pub model: PathBuf,
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
