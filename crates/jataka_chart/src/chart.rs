//! Full natal chart assembly.
//!
//! Pipeline: civil time → JD (UT) → ayanamsha → sidereal graha longitudes →
//! ascendant → whole-sign houses → nakshatra/pada → dignity. The chart
//! either completes for all nine grahas or fails with a single error;
//! partially filled results are never returned.

use jataka_time::LocalCivilTime;
use jataka_vedic::{
    AyanamshaSystem, Graha, LunarNode, NakshatraInfo, NodeMode, Rashi, RashiInfo,
    ayanamsha_deg, dignity_of, jd_ut_to_centuries, lunar_node_deg, nakshatra_from_longitude,
    normalize_360, rashi_from_longitude, sidereal_ascendant_deg, whole_sign_houses,
};
use jataka_vedic::bhava::House;
use jataka_vedic::dignity::Dignity;

use crate::error::ChartError;
use crate::provider::EphemerisSource;

/// A birth event: civil timestamp plus geographic location.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthMoment {
    /// Optional label carried through to the result.
    pub name: Option<String>,
    pub civil: LocalCivilTime,
    /// Geographic latitude, degrees north positive. Must lie strictly
    /// inside (-90, 90).
    pub latitude_deg: f64,
    /// Geographic longitude, degrees east positive, within [-180, 180].
    pub longitude_deg: f64,
}

/// Computation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartConfig {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
}

/// The ascendant with its sign and nakshatra placement.
#[derive(Debug, Clone, PartialEq)]
pub struct AscendantInfo {
    pub sidereal_longitude_deg: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
}

/// One graha's full placement in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GrahaEntry {
    pub graha: Graha,
    pub tropical_longitude_deg: f64,
    pub sidereal_longitude_deg: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
    pub dignity: Dignity,
    /// Whole-sign house occupied, 1-12.
    pub house: u8,
    pub retrograde: bool,
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResult {
    pub name: Option<String>,
    pub julian_day_ut: f64,
    pub ayanamsha_system: AyanamshaSystem,
    pub ayanamsha_deg: f64,
    pub ascendant: AscendantInfo,
    /// All nine grahas in [`jataka_vedic::ALL_GRAHAS`] order.
    pub grahas: [GrahaEntry; 9],
    pub houses: [House; 12],
}

/// Whole-sign house of a rashi counted from the lagna rashi, 1-12.
fn house_of(rashi: Rashi, lagna: Rashi) -> u8 {
    ((rashi.index() + 12 - lagna.index()) % 12) + 1
}

fn require_finite(angle_deg: f64) -> Result<f64, ChartError> {
    if angle_deg.is_finite() {
        Ok(angle_deg)
    } else {
        Err(ChartError::OutOfRangeAngle(angle_deg))
    }
}

/// Compute a complete natal chart.
///
/// The seven classical bodies come from `source`; Rahu and Ketu come from
/// the analytic node model selected by `config.node_mode`, and by
/// convention both are flagged retrograde. Any source failure aborts the
/// whole chart.
pub fn compute_chart(
    source: &dyn EphemerisSource,
    moment: &BirthMoment,
    config: ChartConfig,
) -> Result<ChartResult, ChartError> {
    let jd_ut = moment.civil.to_jd_ut()?;
    let t = jd_ut_to_centuries(jd_ut);
    let aya = ayanamsha_deg(config.ayanamsha, t);

    // Validates latitude/longitude as a side effect.
    let asc_deg =
        sidereal_ascendant_deg(jd_ut, moment.latitude_deg, moment.longitude_deg, config.ayanamsha)?;
    let asc_rashi = rashi_from_longitude(asc_deg);
    let lagna = asc_rashi.rashi;
    let ascendant = AscendantInfo {
        sidereal_longitude_deg: asc_deg,
        rashi: asc_rashi,
        nakshatra: nakshatra_from_longitude(asc_deg),
    };

    let entry = |graha: Graha, tropical: f64, retrograde: bool| -> Result<GrahaEntry, ChartError> {
        let tropical = require_finite(tropical)?;
        let sidereal = normalize_360(tropical - aya);
        let rashi = rashi_from_longitude(sidereal);
        Ok(GrahaEntry {
            graha,
            tropical_longitude_deg: normalize_360(tropical),
            sidereal_longitude_deg: sidereal,
            house: house_of(rashi.rashi, lagna),
            nakshatra: nakshatra_from_longitude(sidereal),
            dignity: dignity_of(graha, sidereal),
            rashi,
            retrograde,
        })
    };

    let body = |graha: Graha| -> Result<GrahaEntry, ChartError> {
        let pos = source.position(graha, jd_ut)?;
        let motion = require_finite(pos.daily_motion_deg)?;
        entry(graha, pos.tropical_longitude_deg, motion < 0.0)
    };
    let node = |graha: Graha, node: LunarNode| -> Result<GrahaEntry, ChartError> {
        entry(graha, lunar_node_deg(node, t, config.node_mode), true)
    };

    // [`ALL_GRAHAS`] order.
    let grahas = [
        body(Graha::Sun)?,
        body(Graha::Moon)?,
        body(Graha::Mars)?,
        body(Graha::Mercury)?,
        body(Graha::Jupiter)?,
        body(Graha::Venus)?,
        body(Graha::Saturn)?,
        node(Graha::Rahu, LunarNode::Rahu)?,
        node(Graha::Ketu, LunarNode::Ketu)?,
    ];

    Ok(ChartResult {
        name: moment.name.clone(),
        julian_day_ut: jd_ut,
        ayanamsha_system: config.ayanamsha,
        ayanamsha_deg: aya,
        ascendant,
        grahas,
        houses: whole_sign_houses(lagna),
    })
}
