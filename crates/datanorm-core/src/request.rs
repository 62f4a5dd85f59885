//! Operation requests.

use std::fmt;
use std::str::FromStr;

use crate::error::NormalizeError;

/// Which normalizer a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Phone,
    Date,
    String,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Date => "date",
            Self::String => "string",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "date" => Ok(Self::Date),
            "string" => Ok(Self::String),
            _ => Err(NormalizeError::UnsupportedOperation {
                kind: s.to_string(),
            }),
        }
    }
}

/// A single normalization request, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub kind: OperationKind,
    pub input: String,
    /// Pattern used to parse `input`; required for [`OperationKind::Date`].
    pub input_format: Option<String>,
    /// Pattern used to render dates; defaults to [`crate::DEFAULT_OUTPUT_FORMAT`].
    pub output_format: Option<String>,
}

impl OperationRequest {
    pub fn new(kind: OperationKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            input_format: None,
            output_format: None,
        }
    }

    #[must_use]
    pub fn with_input_format(mut self, pattern: impl Into<String>) -> Self {
        self.input_format = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, pattern: impl Into<String>) -> Self {
        self.output_format = Some(pattern.into());
        self
    }

    /// The output pattern, falling back to the default.
    pub fn output_format_or_default(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(crate::DEFAULT_OUTPUT_FORMAT)
    }
}
