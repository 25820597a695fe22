//! Trade mapper CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use trademap_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use trademap_cli::commands::{run_check, run_sample, run_transform};
use trademap_cli::logging::{LogConfig, LogFormat, init_logging};
use trademap_cli::summary::{fields_table, mappings_table, operators_table, transform_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> Result<i32> {
    match command {
        Command::Transform(args) => {
            let run = run_transform(args)?;
            let summary = transform_summary(&run);
            if args.output.is_some() {
                println!("{summary}");
            } else {
                // stdout carries the records
                println!("{}", serde_json::to_string_pretty(&run.to_json())?);
                eprintln!("{summary}");
            }
            Ok(if run.has_errors() { 1 } else { 0 })
        }
        Command::Sample(args) => {
            let fields = run_sample(args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&fields)?);
            } else {
                println!("{}", fields_table(&fields));
            }
            Ok(0)
        }
        Command::Check(args) => {
            let rows = run_check(args)?;
            println!("{}", mappings_table(&rows));
            Ok(0)
        }
        Command::Operators => {
            println!("{}", operators_table());
            Ok(0)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
