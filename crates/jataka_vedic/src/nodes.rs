//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Rahu is the Moon's ascending node; Ketu sits exactly opposite
//! (Rahu + 180°). The mean node follows the Ω Delaunay argument polynomial;
//! the true node adds short-period perturbation corrections (13 sinusoidal
//! terms from Meeus, *Astronomical Algorithms* 2nd ed., Chapter 47).
//!
//! Both nodes are always retrograde by convention: Ω regresses ~19.34°/year.

use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (North Node).
    Rahu,
    /// Descending node (South Node), always Rahu + 180°.
    Ketu,
}

/// Mean or true (perturbation-corrected) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean plus short-period perturbation corrections.
    True,
}

/// Delaunay fundamental arguments `[l, l′, F, D, Ω]` in radians.
///
/// Polynomials from Meeus Ch. 47 (equivalently IERS 2010 Table 5.2e to the
/// precision used here); `t` = Julian centuries since J2000.0.
fn delaunay_args(t: f64) -> [f64; 5] {
    let l = 134.963_396_4
        + t * (477_198.867_505_5 + t * (0.008_741_4 + t * (1.0 / 69_699.0 + t * (-1.0 / 14_712_000.0))));
    let lp = 357.529_109_2 + t * (35_999.050_290_9 + t * (-0.000_153_6 + t * (1.0 / 24_490_000.0)));
    let f = 93.272_095_0
        + t * (483_202.017_523_3 + t * (-0.003_653_9 + t * (-1.0 / 3_526_000.0 + t * (1.0 / 863_310_000.0))));
    let d = 297.850_192_1
        + t * (445_267.111_403_4 + t * (-0.001_881_9 + t * (1.0 / 545_868.0 + t * (-1.0 / 113_065_000.0))));
    let omega = 125.044_547_9
        + t * (-1934.136_289_1 + t * (0.002_075_4 + t * (1.0 / 467_441.0 + t * (-1.0 / 60_616_000.0))));
    [
        normalize_360(l).to_radians(),
        normalize_360(lp).to_radians(),
        normalize_360(f).to_radians(),
        normalize_360(d).to_radians(),
        normalize_360(omega).to_radians(),
    ]
}

/// Mean Rahu longitude in degrees [0, 360).
pub fn mean_rahu_deg(t_centuries: f64) -> f64 {
    delaunay_args(t_centuries)[4].to_degrees()
}

/// Short-period node perturbation in degrees (Meeus Table 47.B).
///
/// Each term is a sine of a linear combination of `[l, l′, F, D, Ω]`.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    #[rustfmt::skip]
    static TERMS: [([i8; 5], f64); 13] = [
        //  l  l'  F   D  Om   amplitude (deg)
        ([ 0,  0,  0,  0,  1], -1.4979),
        ([ 0,  0,  2, -2,  0],  0.1500),
        ([ 0,  0,  2,  0,  0], -0.1226),
        ([ 0,  0,  0,  0,  2],  0.1176),
        ([ 1,  0,  0,  0,  0], -0.0801),
        ([ 0,  1,  0,  0,  0],  0.0056),
        ([ 0,  0,  2,  0, -2], -0.0047),
        ([ 1,  0,  2,  0,  0], -0.0043),
        ([ 0,  0,  2, -2,  2],  0.0040),
        ([ 0,  1,  0,  0, -1],  0.0037),
        ([ 0,  0,  0,  2,  0], -0.0030),
        ([ 2,  0,  0,  0,  0], -0.0020),
        ([ 0,  1,  2, -2,  0],  0.0015),
    ];

    let mut correction = 0.0;
    for (mult, amp) in &TERMS {
        let angle: f64 = mult
            .iter()
            .zip(args.iter())
            .map(|(&m, &a)| m as f64 * a)
            .sum();
        correction += amp * angle.sin();
    }
    correction
}

/// True Rahu longitude in degrees [0, 360).
pub fn true_rahu_deg(t_centuries: f64) -> f64 {
    let args = delaunay_args(t_centuries);
    normalize_360(args[4].to_degrees() + node_perturbation_deg(&args))
}

/// Node longitude in degrees [0, 360) for either node and mode.
pub fn lunar_node_deg(node: LunarNode, t_centuries: f64, mode: NodeMode) -> f64 {
    let rahu = match mode {
        NodeMode::Mean => mean_rahu_deg(t_centuries),
        NodeMode::True => true_rahu_deg(t_centuries),
    };
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => normalize_360(rahu + 180.0),
    }
}
