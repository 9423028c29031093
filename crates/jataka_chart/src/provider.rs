//! Ephemeris source abstraction.
//!
//! Chart assembly only needs tropical ecliptic longitudes of date plus a
//! daily motion for retrograde detection. Any backend that can answer that
//! for the seven classical bodies plugs in here; the lunar nodes are
//! computed analytically and never queried.

use jataka_vedic::Graha;

/// A single body position from an ephemeris backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Geocentric tropical ecliptic longitude of date, degrees.
    pub tropical_longitude_deg: f64,
    /// Instantaneous longitude rate, degrees per day. Negative while the
    /// body is retrograde.
    pub daily_motion_deg: f64,
}

/// Errors an ephemeris backend can report.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The backend cannot serve positions at all (missing kernel, closed
    /// file, remote failure).
    Unavailable(String),
    /// The backend has no data for this body.
    UnsupportedBody(&'static str),
    /// The requested epoch is outside the backend's coverage.
    EpochOutOfRange(f64),
}

impl std::fmt::Display for EphemerisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "{msg}"),
            Self::UnsupportedBody(name) => write!(f, "no ephemeris data for {name}"),
            Self::EpochOutOfRange(jd) => write!(f, "JD {jd} outside ephemeris coverage"),
        }
    }
}

impl std::error::Error for EphemerisError {}

/// Source of tropical longitudes for the seven classical grahas.
///
/// Implementations must be deterministic: the same `(graha, jd_ut)` query
/// must always return the same position.
pub trait EphemerisSource {
    fn position(&self, graha: Graha, jd_ut: f64) -> Result<BodyPosition, EphemerisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            EphemerisError::UnsupportedBody("Ketu").to_string(),
            "no ephemeris data for Ketu"
        );
        assert!(
            EphemerisError::EpochOutOfRange(2_449_402.0)
                .to_string()
                .contains("2449402")
        );
    }
}
