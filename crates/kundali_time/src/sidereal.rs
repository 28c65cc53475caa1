//! Greenwich and local sidereal time.
//!
//! The engine has no Earth-orientation tables, so UT1 is taken equal to UTC
//! (|UT1 − UTC| < 0.9 s, i.e. under 0.004° of sidereal time).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a UT Julian Day, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a UT Julian Day, radians in [0, 2π).
///
/// GMST = ERA + 0.014506 + 4612.156534·T + 1.3915817·T² − … (arcsec).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Local Sidereal Time (= RAMC) in degrees [0, 360) for a UT Julian Day and
/// east longitude in degrees.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_rad(gmst_rad(jd_ut), longitude_east_deg.to_radians())
        .to_degrees()
        .rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((theta_deg - 280.46).abs() < 0.1, "ERA = {theta_deg}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 51s ≈ 99.96°
        let gmst_deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((gmst_deg - 99.97).abs() < 0.1, "GMST = {gmst_deg}");
    }

    #[test]
    fn meeus_example_12a() {
        // 1987 April 10, 0h UT: GMST = 13h10m46.3668s = 197.693195°
        let gmst_deg = gmst_rad(2_446_895.5).to_degrees();
        assert!((gmst_deg - 197.693195).abs() < 0.001, "GMST = {gmst_deg}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_451_545.0;
        let g = gmst_rad(jd).to_degrees();
        let lst = local_sidereal_time_deg(jd, 77.209);
        assert!(((g + 77.209).rem_euclid(360.0) - lst).abs() < 1e-9);
    }

    #[test]
    fn ranges() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            assert!((0.0..TAU).contains(&earth_rotation_angle_rad(jd)));
            assert!((0.0..TAU).contains(&gmst_rad(jd)));
            assert!((0.0..360.0).contains(&local_sidereal_time_deg(jd, -120.0)));
        }
    }
}
