//! Chart assembly errors.

use jataka_time::TimeError;
use jataka_vedic::VedicError;

use crate::provider::EphemerisError;

/// Errors from full chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The birth moment is not a valid civil timestamp or location.
    InvalidBirthMoment(&'static str),
    /// The ephemeris source could not supply a body position; the chart is
    /// aborted rather than returned partially filled.
    EphemerisUnavailable(String),
    /// An angle from the ephemeris source was non-finite.
    OutOfRangeAngle(f64),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBirthMoment(msg) => write!(f, "invalid birth moment: {msg}"),
            Self::EphemerisUnavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::OutOfRangeAngle(v) => write!(f, "angle out of range: {v}"),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate(msg) | TimeError::InvalidOffset(msg) => {
                Self::InvalidBirthMoment(msg)
            }
            _ => Self::InvalidBirthMoment("invalid civil time"),
        }
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidLocation(msg) => Self::InvalidBirthMoment(msg),
            _ => Self::InvalidBirthMoment("invalid chart input"),
        }
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::EphemerisUnavailable(e.to_string())
    }
}
