//! Generic string normalization.

use std::fmt;

/// A trimmed, lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedString(String);

impl NormalizedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim Unicode whitespace from both ends, then lowercase.
///
/// Total and idempotent: normalizing an already normalized string returns it
/// unchanged.
///
/// ```
/// use datanorm_core::normalize_string;
///
/// assert_eq!(normalize_string("\t  Hello World \n").as_str(), "hello world");
/// ```
pub fn normalize_string(raw: &str) -> NormalizedString {
    NormalizedString(raw.trim().to_lowercase())
}
