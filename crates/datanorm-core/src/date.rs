//! Calendar date normalization.
//!
//! Dates are parsed strictly under a caller-supplied input pattern and
//! re-rendered under an output pattern. Values are naive: no time zone is
//! attached or converted.
//!
//! Patterns come in two notations:
//!
//! - strftime, e.g. `%m/%d/%Y` (any pattern containing `%`)
//! - tokens, e.g. `MM/DD/YYYY`, translated to strftime before use
//!
//! | Token | strftime | Meaning |
//! |-------|----------|---------|
//! | `YYYY` | `%Y` | 4-digit year |
//! | `YY` | `%y` | 2-digit year |
//! | `MM` | `%m` | month |
//! | `DD` | `%d` | day of month |
//! | `HH` | `%H` | hour (24h) |
//! | `mm` | `%M` | minute |
//! | `ss` | `%S` | second |

use std::fmt::{self, Write as _};

use chrono::format::{self as chrono_format, Item, Parsed, StrftimeItems};
use chrono::{NaiveDateTime, NaiveTime};
use tracing::{debug, error};

use crate::error::{NormalizeError, Result};

/// Output pattern used when the caller supplies none (`YYYY-MM-DD`).
pub const DEFAULT_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Token → strftime translations, longest token first.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// A validated date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    strftime: String,
}

impl DatePattern {
    /// Validate a pattern in either strftime or token notation.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::PatternMismatch`] for an empty pattern or
    /// one containing an unknown strftime specifier.
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(NormalizeError::pattern_mismatch(pattern, "empty pattern"));
        }
        let strftime = if pattern.contains('%') {
            pattern.to_string()
        } else {
            translate_tokens(pattern)
        };
        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(NormalizeError::pattern_mismatch(
                pattern,
                "invalid format specifier",
            ));
        }
        Ok(Self {
            source: pattern.to_string(),
            strftime,
        })
    }

    /// The pattern as the caller wrote it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The pattern in strftime notation.
    pub fn as_strftime(&self) -> &str {
        &self.strftime
    }

    /// Parse `raw` into a naive date-time.
    ///
    /// Patterns without time fields yield midnight. Once any time field is
    /// parsed, unset minutes and seconds default to zero but the hour must be
    /// determinable (`%I` needs `%p`).
    fn parse_value(&self, raw: &str) -> Result<NaiveDateTime> {
        let mismatch = |err| NormalizeError::pattern_mismatch(&self.source, err);

        let mut parsed = Parsed::new();
        chrono_format::parse(&mut parsed, raw, StrftimeItems::new(self.as_strftime()))
            .map_err(mismatch)?;
        let date = parsed.to_naive_date().map_err(mismatch)?;
        if !has_time_fields(&parsed) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0).map_err(mismatch)?;
        }
        if parsed.second().is_none() {
            parsed.set_second(0).map_err(mismatch)?;
        }
        let time = parsed.to_naive_time().map_err(mismatch)?;
        Ok(date.and_time(time))
    }

    /// Render a value. Fails when the pattern asks for data a naive value
    /// does not have, such as a UTC offset.
    fn render(&self, value: &NaiveDateTime) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", value.format(self.as_strftime())).map_err(|_| {
            NormalizeError::pattern_mismatch(
                &self.source,
                "pattern requires fields a naive calendar value cannot supply",
            )
        })?;
        Ok(out)
    }
}

fn has_time_fields(parsed: &Parsed) -> bool {
    parsed.hour_div_12().is_some()
        || parsed.hour_mod_12().is_some()
        || parsed.minute().is_some()
        || parsed.second().is_some()
        || parsed.nanosecond().is_some()
}

fn translate_tokens(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    'outer: while let Some(ch) = rest.chars().next() {
        for (token, spec) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'outer;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// A date rendered under the requested output pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedDate(String);

impl NormalizedDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse `raw` under `input_pattern` and render it under `output_pattern`.
///
/// # Errors
///
/// Returns [`NormalizeError::PatternMismatch`] when either pattern is invalid,
/// when `raw` does not conform to `input_pattern` (wrong shape, out-of-range
/// field, trailing text, incomplete date), or when `output_pattern` cannot be
/// rendered from a naive value.
///
/// # Example
///
/// ```
/// use datanorm_core::{DEFAULT_OUTPUT_FORMAT, normalize_date};
///
/// let date = normalize_date("01/01/2023", "MM/DD/YYYY", DEFAULT_OUTPUT_FORMAT).unwrap();
/// assert_eq!(date.as_str(), "2023-01-01");
/// ```
pub fn normalize_date(
    raw: &str,
    input_pattern: &str,
    output_pattern: &str,
) -> Result<NormalizedDate> {
    let result = DatePattern::parse(input_pattern).and_then(|input| {
        let output = DatePattern::parse(output_pattern)?;
        let value = input.parse_value(raw)?;
        debug!(
            input_format = input.as_strftime(),
            output_format = output.as_strftime(),
            "parsed calendar value"
        );
        output.render(&value)
    });

    match result {
        Ok(rendered) => Ok(NormalizedDate(rendered)),
        Err(err) => {
            if let NormalizeError::PatternMismatch { pattern, reason } = &err {
                error!(pattern = %pattern, reason = %reason, "invalid date or date pattern");
            }
            Err(err)
        }
    }
}
