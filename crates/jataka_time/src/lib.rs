//! Civil-time to Julian Day conversion and sidereal time.
//!
//! This crate provides:
//! - Proleptic Gregorian calendar ↔ Julian Day conversions
//! - `LocalCivilTime`, a validated civil timestamp with a UTC offset
//! - Earth Rotation Angle, GMST, and local sidereal time
//!
//! All Julian Days in this crate are in UT. UT1 is approximated by UTC:
//! |DUT1| stays below 0.9 s, which is far below the arc-minute precision
//! the downstream chart pipeline needs, so no EOP tables are carried.

pub mod error;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};

/// Civil date/time in a fixed-offset local zone.
///
/// The offset is in hours east of UTC (IST = +5.5). Fractional offsets are
/// allowed; the magnitude is capped at 14 h (the widest real zone).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalCivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub utc_offset_hours: f64,
}

impl LocalCivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Validate all calendar fields without converting.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.month < 1 || self.month > 12 {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if self.day < 1 || self.day > julian::days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidOffset("UTC offset must be within ±14 h"));
        }
        Ok(())
    }

    /// Convert to Julian Day in UT.
    ///
    /// Subtracts the UTC offset from the local wall-clock time, then applies
    /// the Gregorian calendar-to-JD formula with the fractional day included.
    pub fn to_jd_ut(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
            - self.utc_offset_hours / 24.0;
        Ok(calendar_to_jd(self.year, self.month, day_frac))
    }
}

impl std::fmt::Display for LocalCivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let off = self.utc_offset_hours.abs();
        let off_h = off.floor() as u32;
        let off_m = ((off - off_h as f64) * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}{}{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, sign, off_h,
            off_m
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_jd_ut_golden_birth_moment() {
        // 1994-02-18 23:07 IST (+5.5) = 17:37 UT the same day.
        let t = LocalCivilTime::new(1994, 2, 18, 23, 7, 0.0, 5.5);
        let jd = t.to_jd_ut().unwrap();
        assert!(
            (jd - 2_449_402.234_028).abs() < 1e-5,
            "JD = {jd}, expected ~2449402.234028"
        );
    }

    #[test]
    fn offset_subtraction_crosses_midnight() {
        // 01:00 at +5.5 is 19:30 UT the previous day.
        let t = LocalCivilTime::new(2024, 1, 2, 1, 0, 0.0, 5.5);
        let jd = t.to_jd_ut().unwrap();
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 1));
        assert!((d - 1.8125).abs() < 1e-9, "day fraction = {d}");
    }

    #[test]
    fn zero_offset_matches_ut() {
        let local = LocalCivilTime::new(2000, 1, 1, 12, 0, 0.0, 0.0);
        assert!((local.to_jd_ut().unwrap() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_month() {
        let t = LocalCivilTime::new(1994, 13, 1, 0, 0, 0.0, 0.0);
        assert!(matches!(t.to_jd_ut(), Err(TimeError::InvalidDate(_))));
    }

    #[test]
    fn rejects_feb_30() {
        let t = LocalCivilTime::new(1994, 2, 30, 0, 0, 0.0, 0.0);
        assert!(matches!(t.to_jd_ut(), Err(TimeError::InvalidDate(_))));
    }

    #[test]
    fn accepts_feb_29_leap_year() {
        let t = LocalCivilTime::new(2000, 2, 29, 0, 0, 0.0, 0.0);
        assert!(t.to_jd_ut().is_ok());
    }

    #[test]
    fn rejects_feb_29_non_leap_year() {
        let t = LocalCivilTime::new(1900, 2, 29, 0, 0, 0.0, 0.0);
        assert!(t.to_jd_ut().is_err());
    }

    #[test]
    fn rejects_wild_offset() {
        let t = LocalCivilTime::new(1994, 2, 18, 0, 0, 0.0, 26.0);
        assert!(matches!(t.to_jd_ut(), Err(TimeError::InvalidOffset(_))));
    }

    #[test]
    fn display_format() {
        let t = LocalCivilTime::new(1994, 2, 18, 23, 7, 0.0, 5.5);
        assert_eq!(t.to_string(), "1994-02-18T23:07:00.000+05:30");
    }
}
