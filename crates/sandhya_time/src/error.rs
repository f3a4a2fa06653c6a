//! Error types for calendar parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/time construction and parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not form a valid date.
    InvalidDate(&'static str),
    /// Text did not match the expected date/time layout.
    ParseFailure(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::ParseFailure(msg) => write!(f, "parse failure: {msg}"),
        }
    }
}

impl Error for TimeError {}
