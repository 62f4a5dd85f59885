//! Command-line front end for datanorm.
//!
//! - **cli**: argument definitions
//! - **dispatch**: routes one request to one normalizer and classifies the outcome
//! - **logging**: tracing subscriber setup and input redaction

pub mod cli;
pub mod dispatch;
pub mod logging;
