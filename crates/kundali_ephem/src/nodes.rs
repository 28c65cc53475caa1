//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Mean node: polynomial for Ω (Meeus 47.7). True node: mean node plus the
//! five principal periodic terms given by Meeus, Chapter 47.
//! Ketu is always Rahu + 180°; it is never evaluated independently.

use serde::{Deserialize, Serialize};

use crate::lunar::fundamental_arguments;

/// Which lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (Rahu).
    Rahu,
    /// Descending node (Ketu).
    Ketu,
}

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean node plus periodic perturbations.
    True,
}

/// Mean Rahu longitude, degrees [0, 360), mean equinox of date.
pub fn mean_rahu_deg(t: f64) -> f64 {
    fundamental_arguments(t).node
}

/// Periodic correction of the true node, degrees.
fn node_perturbation_deg(t: f64) -> f64 {
    // [nD, nM, nM', nF, amplitude]
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 5] = [
        [ 2.0,  0.0,  0.0, -2.0, -1.4979],
        [ 0.0,  1.0,  0.0,  0.0, -0.1500],
        [ 2.0,  0.0,  0.0,  0.0, -0.1226],
        [ 0.0,  0.0,  0.0,  2.0,  0.1176],
        [ 0.0,  0.0,  2.0, -2.0, -0.0801],
    ];

    let args = fundamental_arguments(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    TERMS
        .iter()
        .map(|k| k[4] * (k[0] * d + k[1] * m + k[2] * mp + k[3] * f).sin())
        .sum()
}

/// True Rahu longitude, degrees [0, 360), mean equinox of date.
pub fn true_rahu_deg(t: f64) -> f64 {
    (mean_rahu_deg(t) + node_perturbation_deg(t)).rem_euclid(360.0)
}

/// Node longitude in degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let rahu = match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    };
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => (rahu + 180.0).rem_euclid(360.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_at_j2000_approx_125() {
        let deg = mean_rahu_deg(0.0);
        assert!((deg - 125.04).abs() < 0.1, "mean Rahu at J2000 = {deg}");
    }

    #[test]
    fn ketu_opposes_rahu_in_both_modes() {
        for mode in [NodeMode::Mean, NodeMode::True] {
            for &t in &[0.0, 0.1, -0.5, 0.24] {
                let rahu = lunar_node_deg(LunarNode::Rahu, t, mode);
                let ketu = lunar_node_deg(LunarNode::Ketu, t, mode);
                let diff = (ketu - rahu).rem_euclid(360.0);
                assert!((diff - 180.0).abs() < 1e-9, "{mode:?} t={t}: {diff}");
            }
        }
    }

    #[test]
    fn mean_node_regresses_about_19_degrees_per_year() {
        let r1 = mean_rahu_deg(0.0);
        let r2 = mean_rahu_deg(0.01);
        let per_year = (r2 - r1 + 180.0).rem_euclid(360.0) - 180.0;
        assert!((per_year + 19.34).abs() < 0.5, "rate = {per_year}");
    }

    #[test]
    fn true_node_stays_near_mean() {
        for &t in &[-1.5, -0.3, 0.0, 0.2, 0.5] {
            let diff = (true_rahu_deg(t) - mean_rahu_deg(t) + 180.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 2.0, "t={t}: {diff}");
        }
    }

    #[test]
    fn node_mode_defaults_to_mean() {
        assert_eq!(NodeMode::default(), NodeMode::Mean);
    }
}
