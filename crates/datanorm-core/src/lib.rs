//! Normalization rules for datanorm.
//!
//! This crate provides three independent, stateless normalizers:
//!
//! - **phone**: free-form phone numbers to `+<digits>` dialing format
//! - **date**: calendar dates parsed and re-rendered under explicit patterns
//! - **text**: trimmed, lowercase generic strings
//!
//! The normalizers never call each other. Selecting one and mapping its
//! outcome to process output is the job of the caller (see `datanorm-cli`).
//!
//! # Example
//!
//! ```
//! use datanorm_core::{normalize_date, normalize_phone, normalize_string};
//!
//! assert_eq!(normalize_phone("123-456-7890").unwrap().as_str(), "+11234567890");
//! assert_eq!(
//!     normalize_date("01/01/2023", "%m/%d/%Y", "%Y-%m-%d").unwrap().as_str(),
//!     "2023-01-01"
//! );
//! assert_eq!(normalize_string("  Hello World  ").as_str(), "hello world");
//! ```

mod error;
mod request;

pub mod date;
pub mod phone;
pub mod text;

pub use error::{NormalizeError, Result};
pub use request::{OperationKind, OperationRequest};

pub use date::{DEFAULT_OUTPUT_FORMAT, DatePattern, NormalizedDate, normalize_date};
pub use phone::{DEFAULT_COUNTRY_CODE, MIN_INTERNATIONAL_DIGITS, NormalizedPhone, normalize_phone};
pub use text::{NormalizedString, normalize_string};
