//! The 9 grahas and rashi lordship.
//!
//! Lordship is the universal Vedic assignment (BPHS): each sign is ruled by
//! one of the 7 classical grahas; Rahu and Ketu rule no sign.

use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 grahas, indexed by `Graha::index()`.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical bodies with an ephemeris position (no nodes).
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
];

impl Graha {
    /// English name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit name of the graha.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Buddh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// True for the lunar nodes, which have no ephemeris body.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

/// Planetary lord of a rashi.
///
/// Mars: Aries/Scorpio; Venus: Taurus/Libra; Mercury: Gemini/Virgo;
/// Moon: Cancer; Sun: Leo; Jupiter: Sagittarius/Pisces;
/// Saturn: Capricorn/Aquarius.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Aries | Rashi::Scorpio => Graha::Mars,
        Rashi::Taurus | Rashi::Libra => Graha::Venus,
        Rashi::Gemini | Rashi::Virgo => Graha::Mercury,
        Rashi::Cancer => Graha::Moon,
        Rashi::Leo => Graha::Sun,
        Rashi::Sagittarius | Rashi::Pisces => Graha::Jupiter,
        Rashi::Capricorn | Rashi::Aquarius => Graha::Saturn,
    }
}

/// Lord of a rashi by 0-based index. `None` if `rashi_index >= 12`.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(ALL_RASHIS[rashi_index as usize]))
}

/// The rashi `count` signs after `rashi_index` (0-based, wraps mod 12).
pub fn nth_rashi_from(rashi_index: u8, count: u8) -> u8 {
    ((rashi_index as u16 + count as u16) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_grahas_indexed() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn sapta_grahas_have_no_nodes() {
        for g in SAPTA_GRAHAS {
            assert!(!g.is_node(), "{} is not a node", g.name());
        }
        assert!(Graha::Rahu.is_node());
        assert!(Graha::Ketu.is_node());
    }

    #[test]
    fn dual_rulerships() {
        assert_eq!(rashi_lord(Rashi::Aries), Graha::Mars);
        assert_eq!(rashi_lord(Rashi::Scorpio), Graha::Mars);
        assert_eq!(rashi_lord(Rashi::Taurus), Graha::Venus);
        assert_eq!(rashi_lord(Rashi::Libra), Graha::Venus);
        assert_eq!(rashi_lord(Rashi::Gemini), Graha::Mercury);
        assert_eq!(rashi_lord(Rashi::Virgo), Graha::Mercury);
        assert_eq!(rashi_lord(Rashi::Sagittarius), Graha::Jupiter);
        assert_eq!(rashi_lord(Rashi::Pisces), Graha::Jupiter);
        assert_eq!(rashi_lord(Rashi::Capricorn), Graha::Saturn);
        assert_eq!(rashi_lord(Rashi::Aquarius), Graha::Saturn);
    }

    #[test]
    fn single_rulerships() {
        assert_eq!(rashi_lord(Rashi::Cancer), Graha::Moon);
        assert_eq!(rashi_lord(Rashi::Leo), Graha::Sun);
    }

    #[test]
    fn lord_by_index() {
        assert_eq!(rashi_lord_by_index(6), Some(Graha::Venus));
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn nth_rashi_wraps() {
        assert_eq!(nth_rashi_from(6, 0), 6);
        assert_eq!(nth_rashi_from(6, 7), 1);
        assert_eq!(nth_rashi_from(11, 1), 0);
    }
}
