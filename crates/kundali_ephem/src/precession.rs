//! Precession in ecliptic longitude and the obliquity of the ecliptic.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006), also published in
//! IERS Conventions 2010, Ch. 5.

/// IAU 2006 general precession in ecliptic longitude p_A, in arcseconds.
///
/// `t` is Julian centuries of TT since J2000.0. Positive values mean the
/// equinox has moved westward, so tropical longitudes of fixed points grow.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// IAU 2006 mean obliquity of the ecliptic of date, in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 0.000000576 * t4
        - 0.0000000434 * t5;
    arcsec / 3600.0
}

/// Shift a J2000 ecliptic longitude to the mean equinox of date.
pub fn j2000_to_date_deg(longitude_j2000: f64, t: f64) -> f64 {
    (longitude_j2000 + general_precession_longitude_deg(t)).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn obliquity_at_j2000() {
        assert_abs_diff_eq!(mean_obliquity_deg(0.0), 23.439_279, epsilon = 1e-6);
    }

    #[test]
    fn obliquity_decreases() {
        assert!(mean_obliquity_deg(0.5) < mean_obliquity_deg(0.0));
    }

    #[test]
    fn precession_to_date_wraps() {
        let lon = j2000_to_date_deg(359.99, 0.1);
        assert!((0.0..360.0).contains(&lon));
        assert!(lon < 1.0);
    }
}
