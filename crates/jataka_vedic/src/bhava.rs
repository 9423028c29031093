//! Whole-sign bhava (house) construction.
//!
//! In the whole-sign system the rashi holding the lagna is the entire first
//! house, the next rashi the entire second, and so on around the zodiac.
//! House cusps are sign boundaries; no quadrant subdivision.

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{ALL_RASHIS, Rashi};

/// One whole-sign house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct House {
    /// House number, 1-12.
    pub number: u8,
    /// The rashi occupying the whole house.
    pub rashi: Rashi,
    /// Planetary lord of that rashi.
    pub lord: Graha,
}

/// Build the 12 whole-sign houses from the lagna rashi.
///
/// `houses[0]` is the first house (the lagna's rashi); house `n` holds the
/// rashi `n − 1` signs after it, wrapping mod 12. Every rashi appears in
/// exactly one house.
pub fn whole_sign_houses(lagna_rashi: Rashi) -> [House; 12] {
    let start = lagna_rashi.index() as usize;
    core::array::from_fn(|i| {
        let rashi = ALL_RASHIS[(start + i) % 12];
        House {
            number: i as u8 + 1,
            rashi,
            lord: rashi_lord(rashi),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_house_is_lagna_rashi() {
        for rashi in ALL_RASHIS {
            let houses = whole_sign_houses(rashi);
            assert_eq!(houses[0].number, 1);
            assert_eq!(houses[0].rashi, rashi);
        }
    }

    #[test]
    fn numbers_run_1_to_12() {
        let houses = whole_sign_houses(Rashi::Aries);
        for (i, h) in houses.iter().enumerate() {
            assert_eq!(h.number as usize, i + 1);
        }
    }

    #[test]
    fn each_rashi_in_exactly_one_house() {
        let houses = whole_sign_houses(Rashi::Scorpio);
        let mut seen = [false; 12];
        for h in houses {
            let idx = h.rashi.index() as usize;
            assert!(!seen[idx], "{} appears twice", h.rashi.name());
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn rotation_follows_zodiac_order() {
        let houses = whole_sign_houses(Rashi::Capricorn);
        for w in houses.windows(2) {
            let next = (w[0].rashi.index() + 1) % 12;
            assert_eq!(w[1].rashi.index(), next);
        }
        // Wrap: 12th house precedes the lagna rashi.
        assert_eq!((houses[11].rashi.index() + 1) % 12, houses[0].rashi.index());
    }

    #[test]
    fn golden_chart_libra_lagna_houses() {
        // 1994-02-18 chart: Libra rising.
        let houses = whole_sign_houses(Rashi::Libra);
        assert_eq!(houses[0].rashi, Rashi::Libra);
        assert_eq!(houses[0].lord, Graha::Venus);
        assert_eq!(houses[3].rashi, Rashi::Capricorn); // 4th house
        assert_eq!(houses[6].rashi, Rashi::Aries); // 7th opposite the lagna
        assert_eq!(houses[6].lord, Graha::Mars);
        assert_eq!(houses[11].rashi, Rashi::Virgo);
    }

    #[test]
    fn lords_match_rulership() {
        for h in whole_sign_houses(Rashi::Gemini) {
            assert_eq!(h.lord, rashi_lord(h.rashi));
        }
    }
}
