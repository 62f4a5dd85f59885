//! Phone number normalization.
//!
//! Converts free-form phone numbers to `+<digits>` dialing format using a
//! fixed two-shape heuristic for a single default numbering plan. No
//! numbering-plan database is consulted:
//!
//! - An explicit leading `+` keeps the digits as-is (at least 7 required).
//! - 10 digits get the default country code prepended.
//! - 11 digits starting with the default country code are taken verbatim.
//! - Anything else is ambiguous.
//!
//! Letters and punctuation are dropped before the digit count is checked,
//! so vanity numbers such as `1-800-FLOWERS` lose their letters silently.

use std::fmt;

use tracing::{debug, error, warn};

use crate::error::{NormalizeError, Result};

/// Country code assumed for national numbers without an explicit prefix.
pub const DEFAULT_COUNTRY_CODE: char = '1';

/// Minimum digits required after an explicit international prefix.
pub const MIN_INTERNATIONAL_DIGITS: usize = 7;

/// Length of a national number without country code.
const NATIONAL_LENGTH: usize = 10;

/// A phone number in `+<digits>` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    fn from_digits(digits: &str) -> Self {
        Self(format!("+{digits}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true if the raw value starts with an explicit `+` after leading whitespace.
fn has_international_prefix(raw: &str) -> bool {
    raw.trim_start().starts_with('+')
}

/// Keeps only ASCII decimal digits.
fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a free-form phone number.
///
/// # Errors
///
/// - [`NormalizeError::TooShort`] when a `+` prefix is present but fewer than
///   [`MIN_INTERNATIONAL_DIGITS`] digits follow it.
/// - [`NormalizeError::AmbiguousFormat`] when there is no prefix and the digit
///   count is neither 10 nor 11-with-leading-country-code.
///
/// # Example
///
/// ```
/// use datanorm_core::normalize_phone;
///
/// assert_eq!(normalize_phone("+44 20 7946 0958").unwrap().as_str(), "+442079460958");
/// assert!(normalize_phone("555-1234").is_err());
/// ```
pub fn normalize_phone(raw: &str) -> Result<NormalizedPhone> {
    let digits = digits_only(raw);
    let count = digits.len();

    if has_international_prefix(raw) {
        if count < MIN_INTERNATIONAL_DIGITS {
            error!(
                digits = count,
                min = MIN_INTERNATIONAL_DIGITS,
                "phone number too short after cleaning"
            );
            return Err(NormalizeError::TooShort { digits: count });
        }
        debug!(digits = count, "explicit international prefix");
        return Ok(NormalizedPhone::from_digits(&digits));
    }

    if count == NATIONAL_LENGTH {
        debug!(
            country_code = %DEFAULT_COUNTRY_CODE,
            "national number, prepending default country code"
        );
        return Ok(NormalizedPhone(format!("+{DEFAULT_COUNTRY_CODE}{digits}")));
    }

    if count == NATIONAL_LENGTH + 1 && digits.starts_with(DEFAULT_COUNTRY_CODE) {
        debug!("national number with leading country code");
        return Ok(NormalizedPhone::from_digits(&digits));
    }

    warn!(
        digits = count,
        "could not determine country code for phone number"
    );
    Err(NormalizeError::AmbiguousFormat { digits: count })
}
