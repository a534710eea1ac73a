//! fhir-synth CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use synth_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use synth_cli::commands::{run_bundle, run_create_dataset, run_create_patient};
use synth_cli::logging::{LogConfig, LogFormat, init_logging};
use synth_cli::summary::{print_bundle_summary, print_summary};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::CreatePatient(args) => match run_create_patient(args) {
            Ok(Some(path)) => {
                println!("Patient: {}", path.display());
                0
            }
            Ok(None) => 0,
            Err(error) => report(&error),
        },
        Command::CreateDataset(args) => match run_create_dataset(args) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => report(&error),
        },
        Command::Bundle(args) => match run_bundle(args) {
            Ok(result) => {
                print_bundle_summary(&result);
                0
            }
            Err(error) => report(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
