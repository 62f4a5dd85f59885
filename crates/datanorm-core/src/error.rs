//! Error types for the normalizers.
//!
//! Errors describe what went wrong without carrying the raw input, so they
//! can be logged without leaking the value being normalized.

use thiserror::Error;

/// Failure reported by a normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NormalizeError {
    /// An explicit international prefix was given but too few digits follow it.
    #[error("phone number has {digits} digits after the international prefix, at least 7 required")]
    TooShort {
        /// Number of digits left after stripping formatting.
        digits: usize,
    },

    /// Digit count matches neither recognized national shape.
    #[error("cannot determine country code for a phone number with {digits} digits")]
    AmbiguousFormat {
        /// Number of digits left after stripping formatting.
        digits: usize,
    },

    /// Input does not conform to the pattern, or the pattern itself is invalid.
    #[error("date does not match pattern '{pattern}': {reason}")]
    PatternMismatch {
        /// The pattern being applied, as given by the caller.
        pattern: String,
        /// Why parsing or rendering failed.
        reason: String,
    },

    /// Operation kind outside the closed set.
    #[error("unsupported operation type '{kind}' (expected phone, date or string)")]
    UnsupportedOperation {
        /// The rejected kind.
        kind: String,
    },
}

impl NormalizeError {
    pub(crate) fn pattern_mismatch(pattern: &str, reason: impl ToString) -> Self {
        Self::PatternMismatch {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short taxonomy name, used as a structured field in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::AmbiguousFormat { .. } => "ambiguous_format",
            Self::PatternMismatch { .. } => "pattern_mismatch",
            Self::UnsupportedOperation { .. } => "unsupported_operation",
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
