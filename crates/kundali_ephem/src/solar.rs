//! Geocentric longitude of the Sun.
//!
//! Low-precision theory of Meeus, "Astronomical Algorithms" (2nd ed),
//! Chapter 25: accurate to ~0.01° over several centuries around J2000.

/// Constant of annual aberration expressed as a longitude shift, degrees.
const ABERRATION_DEG: f64 = 0.005_69;

/// Geometric mean longitude L0 of the Sun, degrees, mean equinox of date.
pub fn mean_longitude_deg(t: f64) -> f64 {
    (280.46646 + 36000.76983 * t + 0.0003032 * t * t).rem_euclid(360.0)
}

/// Mean anomaly M of the Sun, degrees.
pub fn mean_anomaly_deg(t: f64) -> f64 {
    (357.52911 + 35999.05029 * t - 0.0001537 * t * t).rem_euclid(360.0)
}

/// Equation of the centre C, degrees.
fn equation_of_centre_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// True geometric longitude of the Sun, degrees [0, 360), mean equinox of date.
pub fn true_longitude_deg(t: f64) -> f64 {
    (mean_longitude_deg(t) + equation_of_centre_deg(t)).rem_euclid(360.0)
}

/// Longitude of the Sun as seen from Earth (aberration applied), degrees
/// [0, 360), mean equinox of date.
pub fn sun_longitude_deg(t: f64) -> f64 {
    (true_longitude_deg(t) - ABERRATION_DEG).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Meeus example 25.a, 1992 Oct 13.0 TD.
    const T_EXAMPLE: f64 = -0.072_183_436;

    #[test]
    fn meeus_example_25a() {
        assert_abs_diff_eq!(mean_longitude_deg(T_EXAMPLE), 201.80720, epsilon = 1e-4);
        assert_abs_diff_eq!(mean_anomaly_deg(T_EXAMPLE), 278.99397, epsilon = 1e-4);
        assert_abs_diff_eq!(true_longitude_deg(T_EXAMPLE), 199.90988, epsilon = 1e-4);
    }

    #[test]
    fn about_one_degree_per_day() {
        let day = 1.0 / 36525.0;
        let diff = sun_longitude_deg(day) - sun_longitude_deg(0.0);
        assert!((diff - 1.0).abs() < 0.05, "daily motion = {diff}");
    }

    #[test]
    fn march_equinox_2000() {
        // 2000-Mar-20 07:35 TT, JD 2451623.816: Sun at 0° Aries.
        let t = (2_451_623.816 - 2_451_545.0) / 36525.0;
        let lon = sun_longitude_deg(t);
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.02, "equinox longitude = {lon}");
    }
}
