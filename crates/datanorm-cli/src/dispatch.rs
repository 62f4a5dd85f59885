//! Request dispatch.
//!
//! Routes one [`OperationRequest`] to exactly one normalizer and classifies
//! the outcome. This is the only place where a failed normalization turns
//! into a process-level error.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use datanorm_core::{
    NormalizeError, OperationKind, OperationRequest, normalize_date, normalize_phone,
    normalize_string,
};
use thiserror::Error;
use tracing::{debug, error, info_span, warn};

use crate::logging::redact_value;

/// Message used when a date request has no input pattern.
pub const MISSING_INPUT_FORMAT: &str = "--input_format is required for date normalization";

/// Outcome of a failed dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Required argument combination not satisfied.
    #[error("{0}")]
    Usage(String),

    /// The normalizer rejected the input.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// A normalizer failed in a way none of the above describes.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl DispatchError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Usage(_) => 2,
            DispatchError::Normalize(_) | DispatchError::Unexpected(_) => 1,
        }
    }
}

/// Run the normalizer selected by `request.kind`.
///
/// A panic inside a normalizer is caught here. For strings the original input
/// is returned unchanged; for the other kinds it becomes
/// [`DispatchError::Unexpected`].
///
/// # Errors
///
/// - [`DispatchError::Usage`] for a date request without an input pattern.
/// - [`DispatchError::Normalize`] when the normalizer rejects the input.
/// - [`DispatchError::Unexpected`] when a normalizer panics.
pub fn dispatch(request: &OperationRequest) -> Result<String, DispatchError> {
    dispatch_with(request, run)
}

/// Run `normalize` for `request` and classify its outcome.
pub(crate) fn dispatch_with<F>(
    request: &OperationRequest,
    normalize: F,
) -> Result<String, DispatchError>
where
    F: FnOnce(&OperationRequest) -> Result<String, DispatchError>,
{
    let span = info_span!("normalize", kind = %request.kind);
    let _guard = span.enter();
    debug!(input = redact_value(&request.input), "dispatching request");

    match panic::catch_unwind(AssertUnwindSafe(|| normalize(request))) {
        Ok(Ok(value)) => {
            debug!(output = redact_value(&value), "normalized");
            Ok(value)
        }
        Ok(Err(DispatchError::Normalize(err))) => {
            error!(
                error_kind = err.kind(),
                input = redact_value(&request.input),
                "{} normalization failed: {err}",
                request.kind
            );
            Err(DispatchError::Normalize(err))
        }
        Ok(Err(err)) => Err(err),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            if request.kind == OperationKind::String {
                warn!(
                    error = %message,
                    "string normalization failed, returning input unchanged"
                );
                Ok(request.input.clone())
            } else {
                error!(critical = true, error = %message, "an unexpected error occurred");
                Err(DispatchError::Unexpected(message))
            }
        }
    }
}

fn run(request: &OperationRequest) -> Result<String, DispatchError> {
    let value = match request.kind {
        OperationKind::Phone => normalize_phone(&request.input)?.into_inner(),
        OperationKind::Date => {
            let input_format = request
                .input_format
                .as_deref()
                .ok_or_else(|| DispatchError::Usage(MISSING_INPUT_FORMAT.to_string()))?;
            normalize_date(
                &request.input,
                input_format,
                request.output_format_or_default(),
            )?
            .into_inner()
        }
        OperationKind::String => normalize_string(&request.input).into_inner(),
    };
    Ok(value)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a thread-local subscriber and return what it logged.
    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (result, logs)
    }

    fn panicking(_: &OperationRequest) -> Result<String, DispatchError> {
        panic!("normalizer blew up")
    }

    #[test]
    fn string_panic_returns_original_input() {
        let request = OperationRequest::new(OperationKind::String, "  Mixed Case  ");
        let (result, logs) = capture_logs(|| dispatch_with(&request, panicking));
        assert_eq!(result.unwrap(), "  Mixed Case  ");
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("returning input unchanged"), "{logs}");
        assert!(logs.contains("normalizer blew up"), "{logs}");
    }

    #[test]
    fn phone_and_date_panics_are_unexpected() {
        for kind in [OperationKind::Phone, OperationKind::Date] {
            let request = OperationRequest::new(kind, "whatever").with_input_format("%Y");
            let (result, logs) = capture_logs(|| dispatch_with(&request, panicking));
            match result {
                Err(DispatchError::Unexpected(message)) => {
                    assert_eq!(message, "normalizer blew up");
                }
                other => panic!("expected Unexpected for {kind}, got {other:?}"),
            }
            assert!(logs.contains("ERROR"), "{logs}");
            assert!(logs.contains("critical=true"), "{logs}");
        }
    }

    #[test]
    fn normalize_errors_pass_through_dispatch_with() {
        let request = OperationRequest::new(OperationKind::Phone, "1");
        let result = dispatch_with(&request, |_| {
            Err(DispatchError::Normalize(NormalizeError::AmbiguousFormat { digits: 1 }))
        });
        assert!(matches!(
            result,
            Err(DispatchError::Normalize(NormalizeError::AmbiguousFormat { digits: 1 }))
        ));
    }

    #[test]
    fn panic_messages_are_extracted() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(DispatchError::Usage(String::new()).exit_code(), 2);
        assert_eq!(
            DispatchError::Normalize(NormalizeError::TooShort { digits: 3 }).exit_code(),
            1
        );
        assert_eq!(DispatchError::Unexpected(String::new()).exit_code(), 1);
    }
}
