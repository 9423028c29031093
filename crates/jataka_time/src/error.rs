//! Error types for civil-time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation and Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    InvalidDate(&'static str),
    /// The UTC offset is not a usable zone offset.
    InvalidOffset(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date/time: {msg}"),
            Self::InvalidOffset(msg) => write!(f, "invalid UTC offset: {msg}"),
        }
    }
}

impl Error for TimeError {}
