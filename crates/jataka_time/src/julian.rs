//! Proleptic Gregorian calendar ↔ Julian Day conversion.
//!
//! The standard Fliegel/Van Flandern style algorithm, kept in the
//! floating-point form from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 7. Only the Gregorian branch is implemented: the chart pipeline
//! deals with modern birth dates, never pre-1582 civil calendars.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// True when `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (proleptic Gregorian).
///
/// `month` must be 1-12; anything else returns 0 so that callers' range
/// checks fail naturally.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calendar date to Julian Day (proleptic Gregorian).
///
/// `day_frac` carries the time-of-day as a fraction (e.g. 18.5 = the 18th
/// at 12:00). The caller validates field ranges; this is pure arithmetic.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor()
        + day_frac
        + b as f64
        - 1524.5
}

/// Julian Day back to `(year, month, day_frac)` (proleptic Gregorian).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;
    (year, month, day_frac)
}
