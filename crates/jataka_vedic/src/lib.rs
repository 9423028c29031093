//! Pure Vedic chart mathematics on sidereal ecliptic longitudes.
//!
//! This crate provides:
//! - Rashi (zodiac sign) and nakshatra/pada mapping with lords
//! - Ayanamsha computation (Lahiri and related systems)
//! - Lagna (ascendant) spherical trigonometry
//! - Lunar node (Rahu/Ketu) longitudes
//! - Whole-sign bhava (house) construction
//! - Graha dignity classification
//!
//! Everything here is a pure function of its inputs; the static reference
//! tables are immutable integer-indexed arrays.

pub mod ayanamsha;
pub mod bhava;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod nodes;
pub mod rashi;
pub mod util;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, jd_ut_to_centuries};
pub use bhava::{House, whole_sign_houses};
pub use dignity::{Dignity, Relation, dignity_of, natural_relation};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, nth_rashi_from, rashi_lord, rashi_lord_by_index};
pub use lagna::{mean_obliquity_rad, sidereal_ascendant_deg, tropical_ascendant_rad};
pub use nakshatra::{
    NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use nodes::{LunarNode, NodeMode, lunar_node_deg};
pub use rashi::{Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::normalize_360;
