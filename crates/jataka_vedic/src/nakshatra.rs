//! Nakshatra (lunar mansion) and pada mapping.
//!
//! The ecliptic is split into 27 equal nakshatras of 13°20′ each, Ashwini
//! starting at 0° sidereal, and each nakshatra into 4 padas of 3°20′.
//! Boundaries are half-open: a longitude exactly at a nakshatra or pada
//! boundary belongs to the segment that starts there.
//!
//! Each nakshatra has a lord from the fixed 9-graha vimshottari cycle
//! (Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter, Saturn, Mercury), which
//! repeats three times over the 27 nakshatras.

use crate::graha::Graha;
use crate::util::normalize_360;

/// Width of one nakshatra: 360/27 = 13.333… degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Width of one pada: a quarter nakshatra, 3.333… degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 9-graha lord cycle, applied as `LORD_CYCLE[nakshatra_index % 9]`.
pub const LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Venus,
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Rahu,
    Graha::Jupiter,
    Graha::Saturn,
    Graha::Mercury,
];

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha from the 9-lord cycle.
    pub const fn lord(self) -> Graha {
        LORD_CYCLE[(self as u8 % 9) as usize]
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Nakshatra/pada placement of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Ruling graha of the nakshatra.
    pub lord: Graha,
    /// Decimal degrees within the nakshatra [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

/// Map a sidereal longitude to its nakshatra, pada, and lord.
///
/// Input outside [0, 360) is normalized first.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nakshatra_index = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - nakshatra_index as f64 * NAKSHATRA_SPAN;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    let nakshatra = ALL_NAKSHATRAS[nakshatra_index as usize];
    NakshatraInfo {
        nakshatra,
        nakshatra_index,
        pada,
        lord: nakshatra.lord(),
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_circle() {
        assert!((NAKSHATRA_SPAN * 27.0 - 360.0).abs() < 1e-12);
        assert!((PADA_SPAN * 108.0 - 360.0).abs() < 1e-12);
    }

    #[test]
    fn zero_is_ashwini_pada_1() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert_eq!(info.lord, Graha::Ketu);
    }

    #[test]
    fn nakshatra_boundary_starts_next() {
        let info = nakshatra_from_longitude(NAKSHATRA_SPAN);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.pada, 1);
        assert!(info.degrees_in_nakshatra.abs() < 1e-12);
    }

    #[test]
    fn pada_boundary_starts_next() {
        // 3°20′ into Ashwini is pada 2 exactly.
        let info = nakshatra_from_longitude(PADA_SPAN);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 2);
    }

    #[test]
    fn golden_moon_krittika_pada_3() {
        // Sidereal Moon ≈ 35.97° for the 1994-02-18 golden chart.
        let info = nakshatra_from_longitude(35.970);
        assert_eq!(info.nakshatra, Nakshatra::Krittika);
        assert_eq!(info.pada, 3);
        assert_eq!(info.lord, Graha::Sun);
    }

    #[test]
    fn lord_cycle_repeats_three_times() {
        for (i, nak) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(nak.lord(), LORD_CYCLE[i % 9], "{}", nak.name());
        }
        // Spot-check the three Ketu-ruled nakshatras.
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
    }

    #[test]
    fn last_degree_is_revati_pada_4() {
        let info = nakshatra_from_longitude(359.999_999);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
        assert_eq!(info.lord, Graha::Mercury);
    }

    #[test]
    fn pada_always_1_to_4() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let info = nakshatra_from_longitude(lon);
            assert!((1..=4).contains(&info.pada), "pada at {lon}");
            assert!(info.nakshatra_index <= 26);
            lon += 0.37;
        }
    }

    #[test]
    fn midpoint_round_trip() {
        for nak_idx in 0..27u8 {
            for pada in 1..=4u8 {
                let mid = nak_idx as f64 * NAKSHATRA_SPAN
                    + (pada - 1) as f64 * PADA_SPAN
                    + PADA_SPAN / 2.0;
                let info = nakshatra_from_longitude(mid);
                assert_eq!(info.nakshatra_index, nak_idx);
                assert_eq!(info.pada, pada);
            }
        }
    }
}
