//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward (counter-clockwise) arc from `from` to `to`, degrees [0, 360).
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// Shortest angular separation between two longitudes, degrees [0, 180].
pub fn separation(a: f64, b: f64) -> f64 {
    let d = forward_arc(a, b);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Whether `lon` lies in the half-open arc `[start, end)` measured forward.
///
/// A zero-length arc contains nothing.
pub fn arc_contains(start: f64, end: f64, lon: f64) -> bool {
    forward_arc(start, lon) < forward_arc(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_abs_diff_eq!(normalize_360(-10.0), 350.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_360(730.0), 10.0, epsilon = 1e-10);
        assert!(normalize_360(-1e-18) < 360.0);
    }

    #[test]
    fn separation_symmetric() {
        assert_abs_diff_eq!(separation(350.0, 10.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(separation(10.0, 350.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(separation(0.0, 180.0), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn arc_lower_bound_closed() {
        assert!(arc_contains(30.0, 60.0, 30.0));
        assert!(!arc_contains(30.0, 60.0, 60.0));
    }

    #[test]
    fn arc_wraps_through_zero() {
        assert!(arc_contains(350.0, 20.0, 5.0));
        assert!(arc_contains(350.0, 20.0, 355.0));
        assert!(!arc_contains(350.0, 20.0, 25.0));
    }

    #[test]
    fn empty_arc() {
        assert!(!arc_contains(10.0, 10.0, 10.0));
    }
}
