//! datanorm CLI.

use clap::error::ErrorKind;
use clap::{ColorChoice, CommandFactory, Parser};
use datanorm_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use datanorm_cli::dispatch::{DispatchError, dispatch};
use datanorm_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let request = cli.to_request();
    let exit_code = match dispatch(&request) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(DispatchError::Usage(message)) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, message)
            .exit(),
        Err(error) => error.exit_code(),
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `--log_level` wins over `-v/-q`; `RUST_LOG` applies only when neither is given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_override = match cli.log_level {
        Some(level) => Some(match level {
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Warning => LevelFilter::WARN,
            LogLevelArg::Error | LogLevelArg::Critical => LevelFilter::ERROR,
        }),
        None if cli.verbosity.is_present() => Some(cli.verbosity.tracing_level_filter()),
        None => None,
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    let config = LogConfig::default()
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
        .with_ansi(with_ansi);
    match level_override {
        Some(level) => config.with_level(level),
        None => config,
    }
}
