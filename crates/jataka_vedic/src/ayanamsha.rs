//! Ayanamsha (tropical→sidereal offset) computation.
//!
//! Each sidereal system reduces to one parameter: its ayanamsha at J2000.0.
//! The value at any other epoch adds the IAU 2006 general precession in
//! ecliptic longitude to that reference. Used subtractively everywhere:
//! `sidereal = normalize_360(tropical − ayanamsha)`.
//!
//! The precession polynomial is a fit around J2000.0; treat results within
//! roughly ±2000 years of J2000 as reliable. Out-of-range epochs are a
//! caller concern and are not validated here.

use jataka_time::J2000_JD;

/// Sidereal reference systems.
///
/// Lahiri is the Indian government standard (Calendar Reform Committee,
/// 1957, Spica at 0° Libra sidereal) and the default for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha).
    #[default]
    Lahiri,
    /// Krishnamurti Paddhati, minimal offset from Lahiri.
    KP,
    /// B.V. Raman, zero-ayanamsha year ~397 CE.
    Raman,
    /// Fagan-Bradley, the primary Western sidereal calibration.
    FaganBradley,
    /// Sri Yukteshwar, from "The Holy Science" (1894).
    Yukteshwar,
}

/// All supported systems in enum order.
pub const ALL_SYSTEMS: [AyanamshaSystem; 5] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    /// All supported systems.
    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// p_A(T) in arcseconds (Capitaine, Wallace & Chapront 2003):
/// 5028.796195·T + 1.1054348·T² + 0.00007964·T³ − 0.000023857·T⁴
/// − 0.0000000383·T⁵, with T in Julian centuries since J2000.0.
pub fn general_precession_longitude_deg(t_centuries: f64) -> f64 {
    let t = t_centuries;
    let p_a_arcsec = t
        * (5028.796195
            + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    p_a_arcsec / 3600.0
}

/// Ayanamsha in degrees at an epoch.
///
/// `t_centuries` = Julian centuries of UT since J2000.0 (see
/// [`jd_ut_to_centuries`]). Positive for modern epochs: ~23°46′ for Lahiri
/// circa 1994.
pub fn ayanamsha_deg(system: AyanamshaSystem, t_centuries: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_deg(t_centuries)
}

/// Convert a Julian Day (UT) to Julian centuries since J2000.0.
pub fn jd_ut_to_centuries(jd_ut: f64) -> f64 {
    (jd_ut - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_reference_at_j2000() {
        let v = ayanamsha_deg(AyanamshaSystem::Lahiri, 0.0);
        assert!((v - 23.853).abs() < 1e-15);
    }

    #[test]
    fn lahiri_golden_epoch_1994() {
        // 1994-02-18 17:37 UT → ayanamsha between 23.7° and 23.9°.
        let t = jd_ut_to_centuries(2_449_402.234_027_78);
        let v = ayanamsha_deg(AyanamshaSystem::Lahiri, t);
        assert!(v > 23.7 && v < 23.9, "Lahiri 1994 = {v}");
        assert!((v - 23.7711).abs() < 0.001, "Lahiri 1994 = {v}");
    }

    #[test]
    fn precession_rate_about_50_arcsec_per_year() {
        let per_century = general_precession_longitude_deg(1.0);
        assert!((per_century - 1.397).abs() < 0.01, "p_A(1cy) = {per_century}");
    }

    #[test]
    fn past_epochs_have_smaller_ayanamsha() {
        let now = ayanamsha_deg(AyanamshaSystem::Lahiri, 0.0);
        let past = ayanamsha_deg(AyanamshaSystem::Lahiri, -1.0);
        assert!(past < now);
    }

    #[test]
    fn references_ordered_sensibly() {
        for &sys in AyanamshaSystem::all() {
            let v = sys.reference_j2000_deg();
            assert!((20.0..=26.0).contains(&v), "{sys:?} = {v}");
        }
    }

    #[test]
    fn centuries_round_trip() {
        let jd = 2_449_402.234;
        let t = jd_ut_to_centuries(jd);
        assert!((t * 36_525.0 + J2000_JD - jd).abs() < 1e-9);
    }

    #[test]
    fn default_is_lahiri() {
        assert_eq!(AyanamshaSystem::default(), AyanamshaSystem::Lahiri);
    }
}
