//! Graha drishti (planetary aspect) strength in virupas.
//!
//! Piecewise base virupa of the angular distance, plus the special aspects
//! of Mars (4th/8th), Jupiter (5th/9th) and Saturn (3rd/10th).

use std::ops::Range;

use crate::graha::Graha;
use crate::util::normalize_360;

/// Base virupa for an angular distance measured from the aspecting body.
///
/// - `[0, 30)`: 0
/// - `[30, 90)`: `(A − 30) · 0.75`
/// - `[90, 150)`: `45 − (A − 90) · 0.75`
/// - `[150, 180)`: `(A − 150) · 2`
/// - `[180, 300)`: `60 − (A − 180) · 0.5`
/// - `[300, 360)`: 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Bonus for the special aspects.
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    let within = |r1: Range<f64>, r2: Range<f64>| r1.contains(&a) || r2.contains(&a);
    match graha {
        Graha::Mangal if within(90.0..120.0, 210.0..240.0) => 15.0,
        Graha::Guru if within(120.0..150.0, 240.0..270.0) => 30.0,
        Graha::Shani if within(60.0..90.0, 270.0..300.0) => 45.0,
        _ => 0.0,
    }
}

/// Total aspect strength of `graha` at `source_lon` on the point `target_lon`.
pub fn drishti_virupa(graha: Graha, source_lon: f64, target_lon: f64) -> f64 {
    let a = normalize_360(target_lon - source_lon);
    base_virupa(a) + special_virupa(graha, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn opposition_is_full() {
        assert_abs_diff_eq!(base_virupa(180.0), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn conjunction_is_zero() {
        assert_eq!(base_virupa(0.0), 0.0);
        assert_eq!(base_virupa(15.0), 0.0);
    }

    #[test]
    fn piecewise_values() {
        assert_abs_diff_eq!(base_virupa(90.0), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(base_virupa(60.0), 22.5, epsilon = 1e-12);
        assert_abs_diff_eq!(base_virupa(240.0), 30.0, epsilon = 1e-12);
        assert_eq!(base_virupa(330.0), 0.0);
    }

    #[test]
    fn special_aspects() {
        assert_eq!(special_virupa(Graha::Mangal, 95.0), 15.0);
        assert_eq!(special_virupa(Graha::Guru, 125.0), 30.0);
        assert_eq!(special_virupa(Graha::Shani, 275.0), 45.0);
        assert_eq!(special_virupa(Graha::Surya, 95.0), 0.0);
    }

    #[test]
    fn jupiter_trine_total() {
        // 120°: base 45 − 22.5 = 22.5, plus 30 special.
        assert_abs_diff_eq!(
            drishti_virupa(Graha::Guru, 0.0, 120.0),
            52.5,
            epsilon = 1e-12
        );
    }
}
