//! Graha dignity classification.
//!
//! Fixed BPHS reference data: exaltation points, debilitation points
//! (opposite the exaltation), own signs, moolatrikona ranges, and the
//! natural (naisargika) friendship table evaluated against the occupied
//! sign's lord.
//!
//! Classification is by occupied sign, first match wins, in this order:
//! Exaltation → Debilitation → OwnSign → Moolatrikona → Friend → Enemy →
//! Neutral. Rahu and Ketu use a reduced table (exaltation, debilitation,
//! and own sign only; otherwise Neutral).

use crate::graha::{Graha, rashi_lord_by_index};
use crate::util::normalize_360;

/// Dignity of a graha in its occupied sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dignity {
    Exaltation,
    Debilitation,
    OwnSign,
    Moolatrikona,
    Friend,
    Enemy,
    Neutral,
}

impl Dignity {
    /// Display label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exaltation => "Exaltation",
            Self::Debilitation => "Debilitation",
            Self::OwnSign => "Own Sign",
            Self::Moolatrikona => "Moolatrikona",
            Self::Friend => "Friend",
            Self::Enemy => "Enemy",
            Self::Neutral => "Neutral",
        }
    }
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Friend,
    Enemy,
    Neutral,
}

/// Exaltation point in absolute sidereal degrees.
///
/// BPHS: Sun 10° Aries, Moon 3° Taurus, Mars 28° Capricorn,
/// Mercury 15° Virgo, Jupiter 5° Cancer, Venus 27° Pisces,
/// Saturn 20° Libra, Rahu 20° Taurus, Ketu 20° Scorpio (node values are
/// the commonly accepted extension, not strict BPHS).
pub const fn exaltation_degree(graha: Graha) -> f64 {
    match graha {
        Graha::Sun => 10.0,
        Graha::Moon => 33.0,
        Graha::Mars => 298.0,
        Graha::Mercury => 165.0,
        Graha::Jupiter => 95.0,
        Graha::Venus => 357.0,
        Graha::Saturn => 200.0,
        Graha::Rahu => 50.0,
        Graha::Ketu => 230.0,
    }
}

/// Debilitation point: exactly opposite the exaltation point.
pub const fn debilitation_degree(graha: Graha) -> f64 {
    let d = exaltation_degree(graha) + 180.0;
    if d >= 360.0 { d - 360.0 } else { d }
}

/// Own-sign indices (0 = Aries). Nodes use the common co-rulership values.
pub const fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Sun => &[4],      // Leo
        Graha::Moon => &[3],     // Cancer
        Graha::Mars => &[0, 7],  // Aries, Scorpio
        Graha::Mercury => &[2, 5], // Gemini, Virgo
        Graha::Jupiter => &[8, 11], // Sagittarius, Pisces
        Graha::Venus => &[1, 6], // Taurus, Libra
        Graha::Saturn => &[9, 10], // Capricorn, Aquarius
        Graha::Rahu => &[10],    // Aquarius
        Graha::Ketu => &[7],     // Scorpio
    }
}

/// Moolatrikona range as (sign index, start°, end°) within the sign.
///
/// Sun 0-20° Leo, Moon 4-20° Taurus, Mars 0-12° Aries, Mercury 16-20° Virgo,
/// Jupiter 0-10° Sagittarius, Venus 0-15° Libra, Saturn 0-20° Aquarius.
/// The nodes have none.
pub const fn moolatrikona_range(graha: Graha) -> Option<(u8, f64, f64)> {
    match graha {
        Graha::Sun => Some((4, 0.0, 20.0)),
        Graha::Moon => Some((1, 4.0, 20.0)),
        Graha::Mars => Some((0, 0.0, 12.0)),
        Graha::Mercury => Some((5, 16.0, 20.0)),
        Graha::Jupiter => Some((8, 0.0, 10.0)),
        Graha::Venus => Some((6, 0.0, 15.0)),
        Graha::Saturn => Some((10, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Natural (naisargika) relationship between two sapta grahas (BPHS table).
///
/// Any pairing involving a node is Neutral.
pub const fn natural_relation(graha: Graha, other: Graha) -> Relation {
    use Graha::*;
    use Relation::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Sun, Moon | Mars | Jupiter) => Friend,
        (Sun, Venus | Saturn) => Enemy,
        (Sun, Mercury | Sun) => Neutral,

        (Moon, Sun | Mercury) => Friend,
        (Moon, _) => Neutral,

        (Mars, Sun | Moon | Jupiter) => Friend,
        (Mars, Mercury) => Enemy,
        (Mars, _) => Neutral,

        (Mercury, Sun | Venus) => Friend,
        (Mercury, Moon) => Enemy,
        (Mercury, _) => Neutral,

        (Jupiter, Sun | Moon | Mars) => Friend,
        (Jupiter, Mercury | Venus) => Enemy,
        (Jupiter, _) => Neutral,

        (Venus, Mercury | Saturn) => Friend,
        (Venus, Sun | Moon) => Enemy,
        (Venus, _) => Neutral,

        (Saturn, Mercury | Venus) => Friend,
        (Saturn, Sun | Moon | Mars) => Enemy,
        (Saturn, _) => Neutral,
    }
}

fn occupied_sign_index(sidereal_lon: f64) -> u8 {
    ((normalize_360(sidereal_lon) / 30.0).floor() as u8).min(11)
}

fn sign_index_of_point(point_deg: f64) -> u8 {
    ((point_deg / 30.0).floor() as u8).min(11)
}

fn in_moolatrikona(graha: Graha, lon: f64, sign_index: u8) -> bool {
    match moolatrikona_range(graha) {
        Some((mt_sign, start, end)) if mt_sign == sign_index => {
            let deg_in_sign = lon - sign_index as f64 * 30.0;
            deg_in_sign >= start && deg_in_sign < end
        }
        _ => false,
    }
}

/// Classify the dignity of a graha at a sidereal longitude.
///
/// First match wins: Exaltation → Debilitation → OwnSign → Moolatrikona →
/// Friend → Enemy → Neutral. With sign-level exaltation and this ordering,
/// every moolatrikona range is shadowed by an earlier label; the branch is
/// kept because the ordering is the documented contract, not an accident of
/// the data.
pub fn dignity_of(graha: Graha, sidereal_lon_deg: f64) -> Dignity {
    let lon = normalize_360(sidereal_lon_deg);
    let sign_index = occupied_sign_index(lon);

    if sign_index == sign_index_of_point(exaltation_degree(graha)) {
        return Dignity::Exaltation;
    }
    if sign_index == sign_index_of_point(debilitation_degree(graha)) {
        return Dignity::Debilitation;
    }
    if own_signs(graha).contains(&sign_index) {
        return Dignity::OwnSign;
    }
    if in_moolatrikona(graha, lon, sign_index) {
        return Dignity::Moolatrikona;
    }

    if graha.is_node() {
        return Dignity::Neutral;
    }
    let lord = match rashi_lord_by_index(sign_index) {
        Some(lord) => lord,
        None => return Dignity::Neutral,
    };
    match natural_relation(graha, lord) {
        Relation::Friend => Dignity::Friend,
        Relation::Enemy => Dignity::Enemy,
        Relation::Neutral => Dignity::Neutral,
    }
}
