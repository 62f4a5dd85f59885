//! CLI argument definitions for datanorm.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use datanorm_core::{DEFAULT_OUTPUT_FORMAT, OperationKind, OperationRequest};

#[derive(Parser)]
#[command(
    name = "datanorm",
    version,
    about = "Data Format Normalizer - normalize phone numbers, dates and strings",
    long_about = "Normalize one value per invocation to a canonical form.\n\n\
                  Phone numbers become +<country code><number> (10-digit numbers get +1).\n\
                  Dates are re-rendered under --output_format (default YYYY-MM-DD).\n\
                  Strings are trimmed and lowercased.\n\n\
                  The normalized value is written to stdout; diagnostics go to stderr."
)]
pub struct Cli {
    /// The type of data to normalize.
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub kind: TypeArg,

    /// The input data to normalize.
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub input: String,

    /// The input date pattern (required for date normalization), e.g. '%m/%d/%Y' or 'MM/DD/YYYY'.
    #[arg(
        long = "input_format",
        visible_alias = "input-format",
        value_name = "PATTERN"
    )]
    pub input_format: Option<String>,

    /// The output date pattern. Only applies to date normalization.
    #[arg(
        long = "output_format",
        visible_alias = "output-format",
        value_name = "PATTERN",
        default_value = DEFAULT_OUTPUT_FORMAT
    )]
    pub output_format: String,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Minimum severity written to the log (overrides -v/-q flags).
    #[arg(
        long = "log_level",
        visible_alias = "log-level",
        value_enum,
        ignore_case = true
    )]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (compact for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include raw input values in log output (they are redacted otherwise).
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    /// Build the request handed to the dispatcher.
    pub fn to_request(&self) -> OperationRequest {
        OperationRequest {
            kind: self.kind.into(),
            input: self.input.clone(),
            input_format: self.input_format.clone(),
            output_format: Some(self.output_format.clone()),
        }
    }
}

/// CLI operation type choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Phone,
    Date,
    String,
}

impl From<TypeArg> for OperationKind {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Phone => OperationKind::Phone,
            TypeArg::Date => OperationKind::Date,
            TypeArg::String => OperationKind::String,
        }
    }
}

/// CLI log level choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING", alias = "WARN")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    /// Same filter as ERROR; tracing has no higher level.
    #[value(name = "CRITICAL")]
    Critical,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
