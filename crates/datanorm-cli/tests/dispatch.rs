//! Integration tests for request dispatch.

use datanorm_cli::dispatch::{DispatchError, MISSING_INPUT_FORMAT, dispatch};
use datanorm_core::{NormalizeError, OperationKind, OperationRequest};

fn phone(input: &str) -> OperationRequest {
    OperationRequest::new(OperationKind::Phone, input)
}

#[test]
fn phone_success() {
    assert_eq!(dispatch(&phone("123-456-7890")).unwrap(), "+11234567890");
    assert_eq!(dispatch(&phone("+44 20 7946 0958")).unwrap(), "+442079460958");
}

#[test]
fn phone_failure_is_normalize_error() {
    let err = dispatch(&phone("555-1234")).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Normalize(NormalizeError::AmbiguousFormat { digits: 7 })
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn date_with_default_output_format() {
    let request =
        OperationRequest::new(OperationKind::Date, "01/01/2023").with_input_format("%m/%d/%Y");
    assert_eq!(dispatch(&request).unwrap(), "2023-01-01");
}

#[test]
fn date_with_explicit_output_format() {
    let request = OperationRequest::new(OperationKind::Date, "2023-07-04")
        .with_input_format("YYYY-MM-DD")
        .with_output_format("DD.MM.YYYY");
    assert_eq!(dispatch(&request).unwrap(), "04.07.2023");
}

#[test]
fn date_month_out_of_range() {
    let request =
        OperationRequest::new(OperationKind::Date, "2023-13-01").with_input_format("%Y-%m-%d");
    let err = dispatch(&request).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Normalize(NormalizeError::PatternMismatch { .. })
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn date_without_input_format_is_usage_error() {
    let request = OperationRequest::new(OperationKind::Date, "01/01/2023");
    let err = dispatch(&request).unwrap_err();
    assert!(matches!(&err, DispatchError::Usage(message) if message == MISSING_INPUT_FORMAT));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn string_always_succeeds() {
    let request = OperationRequest::new(OperationKind::String, "  Hello World  ");
    assert_eq!(dispatch(&request).unwrap(), "hello world");
    let request = OperationRequest::new(OperationKind::String, "");
    assert_eq!(dispatch(&request).unwrap(), "");
}

#[test]
fn output_format_ignored_for_other_kinds() {
    let request = phone("4155551212").with_output_format("%Q");
    assert_eq!(dispatch(&request).unwrap(), "+14155551212");
}

#[test]
fn error_messages() {
    let request =
        OperationRequest::new(OperationKind::Date, "01/01/2023").with_input_format("%Y-%Q");
    insta::assert_snapshot!(
        dispatch(&request).unwrap_err(),
        @"date does not match pattern '%Y-%Q': invalid format specifier"
    );
    insta::assert_snapshot!(
        dispatch(&OperationRequest::new(OperationKind::Date, "x")).unwrap_err(),
        @"--input_format is required for date normalization"
    );
}
