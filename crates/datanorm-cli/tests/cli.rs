//! Tests for the command-line surface.

use clap::Parser;
use datanorm_cli::cli::{Cli, LogFormatArg, LogLevelArg, TypeArg};
use datanorm_core::{OperationKind, OperationRequest};

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("datanorm").chain(args.iter().copied()))
}

#[test]
fn minimal_phone_invocation() {
    let cli = parse(&["--type", "phone", "--input", "123-456-7890"]).unwrap();
    assert_eq!(cli.kind, TypeArg::Phone);
    assert_eq!(cli.log_level, None);
    assert_eq!(cli.log_format, LogFormatArg::Compact);
    assert_eq!(
        cli.to_request(),
        OperationRequest::new(OperationKind::Phone, "123-456-7890").with_output_format("%Y-%m-%d")
    );
}

#[test]
fn date_invocation_with_both_spellings() {
    let cli = parse(&[
        "--type",
        "date",
        "--input",
        "01/01/2023",
        "--input_format",
        "%m/%d/%Y",
        "--output-format",
        "%d.%m.%Y",
    ])
    .unwrap();
    let request = cli.to_request();
    assert_eq!(request.kind, OperationKind::Date);
    assert_eq!(request.input_format.as_deref(), Some("%m/%d/%Y"));
    assert_eq!(request.output_format_or_default(), "%d.%m.%Y");
}

#[test]
fn date_without_input_format_still_parses() {
    // The dispatcher reports the missing pattern, not clap.
    let cli = parse(&["--type", "date", "--input", "01/01/2023"]).unwrap();
    assert_eq!(cli.input_format, None);
}

#[test]
fn log_level_values() {
    for (value, expected) in [
        ("DEBUG", LogLevelArg::Debug),
        ("INFO", LogLevelArg::Info),
        ("WARNING", LogLevelArg::Warning),
        ("warn", LogLevelArg::Warning),
        ("error", LogLevelArg::Error),
        ("CRITICAL", LogLevelArg::Critical),
    ] {
        let cli = parse(&["--type", "string", "--input", "x", "--log_level", value]).unwrap();
        assert_eq!(cli.log_level, Some(expected), "{value}");
    }
}

#[test]
fn input_may_start_with_hyphen() {
    let cli = parse(&["--type", "string", "--input", "-Dash"]).unwrap();
    assert_eq!(cli.input, "-Dash");
}

#[test]
fn unknown_type_is_rejected() {
    let err = parse(&["--type", "email", "--input", "a@b.c"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn type_and_input_are_required() {
    let err = parse(&["--input", "x"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    let err = parse(&["--type", "phone"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn command_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn logging_flags() {
    let cli = parse(&[
        "--type",
        "string",
        "--input",
        "x",
        "--log-timestamps",
        "--log-data",
        "--log-format",
        "json",
        "--log-file",
        "datanorm.log",
    ])
    .unwrap();
    assert!(cli.log_timestamps);
    assert!(cli.log_data);
    assert_eq!(cli.log_format, LogFormatArg::Json);
    assert_eq!(cli.log_file, Some(std::path::PathBuf::from("datanorm.log")));
}
