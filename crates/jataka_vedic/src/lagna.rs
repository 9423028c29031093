//! Lagna (ascendant) computation.
//!
//! The ascendant is the ecliptic longitude rising on the eastern horizon:
//! a function of local sidereal time, geographic latitude, and the
//! obliquity of the ecliptic (Meeus, *Astronomical Algorithms* 2nd ed.,
//! Ch. 13; standard spherical astronomy).

use std::f64::consts::TAU;

use jataka_time::{gmst_rad, local_sidereal_time_rad};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg, jd_ut_to_centuries};
use crate::error::VedicError;
use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at an epoch, radians.
///
/// Linear IAU term: ε = 23.4392911° − 0.0130042°·T. Higher-order terms stay
/// below an arcsecond over the supported epoch range.
pub fn mean_obliquity_rad(t_centuries: f64) -> f64 {
    (23.439_291_1 - 0.013_004_2 * t_centuries).to_radians()
}

/// Tropical ascendant from local sidereal time, radians in [0, 2π).
///
/// `Asc = atan2(cos LST, −(sin LST·cos ε + tan φ·sin ε))`
///
/// This arrangement of the standard formula resolves the atan2 quadrant so
/// the result is always the eastern-horizon intersection, 0–180° ahead of
/// the MC, with no post-hoc branch. At the equator with LST = 0 it yields
/// 90° (0° Cancer rising while 0° Aries culminates).
pub fn tropical_ascendant_rad(lst_rad: f64, latitude_rad: f64, obliquity_rad: f64) -> f64 {
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * obliquity_rad.cos() + latitude_rad.tan() * obliquity_rad.sin()),
    );
    asc.rem_euclid(TAU)
}

/// Sidereal ascendant degree for an epoch and location, in [0, 360).
///
/// Chains JD (UT) → GMST → LST, applies the ascendant formula with the mean
/// obliquity of date, then subtracts the ayanamsha.
///
/// Latitudes at or beyond ±90° are rejected: the horizon degenerates at the
/// poles and `tan φ` is unbounded there.
pub fn sidereal_ascendant_deg(
    jd_ut: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    system: AyanamshaSystem,
) -> Result<f64, VedicError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return Err(VedicError::InvalidLocation(
            "latitude must be strictly inside (-90, 90)",
        ));
    }
    if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
        return Err(VedicError::InvalidLocation(
            "longitude must be within [-180, 180]",
        ));
    }

    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), longitude_deg.to_radians());
    let t = jd_ut_to_centuries(jd_ut);
    let asc_tropical =
        tropical_ascendant_rad(lst, latitude_deg.to_radians(), mean_obliquity_rad(t));
    let aya = ayanamsha_deg(system, t);
    Ok(normalize_360(asc_tropical.to_degrees() - aya))
}
