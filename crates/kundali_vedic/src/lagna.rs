//! Lagna (Ascendant) and MC (Midheaven) from RAMC.
//!
//! Standard spherical astronomy: the ascendant is the ecliptic point rising
//! on the eastern horizon, the MC the ecliptic point on the upper meridian.
//! All angles in degrees, tropical (equinox of date).
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13.

use crate::util::normalize_360;

/// Ecliptic longitude of the ascendant.
///
/// `Asc = atan2(cos RAMC, −(sin RAMC · cos ε + tan φ · sin ε))`
pub fn lagna_deg(ramc_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let asc = f64::atan2(
        ramc.cos(),
        -(ramc.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the MC: `MC = atan2(sin RAMC, cos RAMC · cos ε)`.
pub fn mc_deg(ramc_deg: f64, obliquity_deg: f64) -> f64 {
    ecliptic_longitude_of_ra_deg(ramc_deg, obliquity_deg)
}

/// Both angles at once, `(lagna, mc)`.
pub fn lagna_and_mc_deg(ramc_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    (
        lagna_deg(ramc_deg, latitude_deg, obliquity_deg),
        mc_deg(ramc_deg, obliquity_deg),
    )
}

/// Ecliptic longitude of the ecliptic point with right ascension `ra_deg`.
pub(crate) fn ecliptic_longitude_of_ra_deg(ra_deg: f64, obliquity_deg: f64) -> f64 {
    let ra = ra_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(ra.sin(), ra.cos() * eps.cos()).to_degrees())
}
