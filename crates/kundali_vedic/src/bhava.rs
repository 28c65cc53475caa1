//! Bhava (house) computation for the whole-sign, equal and Placidus systems.
//!
//! Cusps are sidereal. Placidus is solved in the tropical frame from RAMC and
//! shifted by the ayanamsa; whole-sign and equal houses derive directly from
//! the sidereal ascendant. House n spans `[cusp_n, cusp_{n+1})`.
//!
//! Sources: Meeus Ch. 13 (angles); Placidus semi-arc trisection as in
//! Montenbruck & Pfleger.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::lagna::{ecliptic_longitude_of_ra_deg, lagna_and_mc_deg};
use crate::util::{arc_contains, normalize_360};

/// Latitude beyond which the Placidus semi-arcs degenerate.
pub const MAX_PLACIDUS_LATITUDE_DEG: f64 = 66.5;

const PLACIDUS_MAX_ITER: usize = 50;
const PLACIDUS_TOLERANCE_RAD: f64 = 1e-12;

/// Supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    /// Each house is one whole sign, starting with the ascendant's sign.
    #[default]
    Whole,
    /// 30° houses measured from the ascendant degree.
    Equal,
    /// Time-based trisection of the diurnal and nocturnal semi-arcs.
    Placidus,
}

pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 3] = [
    HouseSystem::Whole,
    HouseSystem::Equal,
    HouseSystem::Placidus,
];

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Equal => "equal",
            Self::Placidus => "placidus",
        }
    }

    /// Whether the system has a latitude limit.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus)
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_HOUSE_SYSTEMS
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| VedicError::InvalidInput(format!("unknown house system: {s}")))
    }
}

/// Observer frame needed to erect houses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseFrame {
    /// Right ascension of the MC (local sidereal time), degrees.
    pub ramc_deg: f64,
    /// Geographic latitude, degrees north positive.
    pub latitude_deg: f64,
    /// True or mean obliquity of date, degrees.
    pub obliquity_deg: f64,
    /// Offset subtracted from tropical longitudes, degrees.
    pub ayanamsa_deg: f64,
}

/// A single house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bhava {
    /// 1-based house number.
    pub number: u8,
    /// Sidereal cusp longitude, degrees [0, 360).
    pub cusp_deg: f64,
    /// Inclusive start (= cusp).
    pub start_deg: f64,
    /// Exclusive end (= next cusp).
    pub end_deg: f64,
}

/// Houses plus the sidereal angles they were built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BhavaResult {
    pub system: HouseSystem,
    pub bhavas: [Bhava; 12],
    pub lagna_deg: f64,
    pub mc_deg: f64,
}

/// Erect the 12 houses for `system`.
pub fn compute_bhavas(system: HouseSystem, frame: &HouseFrame) -> Result<BhavaResult, VedicError> {
    check_frame(frame)?;

    let (asc_trop, mc_trop) =
        lagna_and_mc_deg(frame.ramc_deg, frame.latitude_deg, frame.obliquity_deg);
    let lagna = normalize_360(asc_trop - frame.ayanamsa_deg);
    let mc = normalize_360(mc_trop - frame.ayanamsa_deg);

    let cusps = match system {
        HouseSystem::Whole => whole_sign_cusps(lagna),
        HouseSystem::Equal => equal_cusps(lagna),
        HouseSystem::Placidus => {
            if frame.latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
                return Err(VedicError::UndefinedAtLatitude {
                    system,
                    latitude_deg: frame.latitude_deg,
                });
            }
            let tropical = placidus_cusps(
                asc_trop,
                mc_trop,
                frame.ramc_deg,
                frame.latitude_deg,
                frame.obliquity_deg,
            );
            tropical.map(|c| normalize_360(c - frame.ayanamsa_deg))
        }
    };

    Ok(BhavaResult {
        system,
        bhavas: build_bhavas(&cusps),
        lagna_deg: lagna,
        mc_deg: mc,
    })
}

/// 1-based house containing a sidereal longitude.
pub fn house_of(bhavas: &[Bhava; 12], sidereal_lon: f64) -> u8 {
    let lon = normalize_360(sidereal_lon);
    bhavas
        .iter()
        .find(|b| arc_contains(b.start_deg, b.end_deg, lon))
        .map(|b| b.number)
        // The arcs tile the circle; only a degenerate zero-width set misses.
        .unwrap_or(1)
}

fn check_frame(frame: &HouseFrame) -> Result<(), VedicError> {
    if !frame.latitude_deg.is_finite() || frame.latitude_deg.abs() > 90.0 {
        return Err(VedicError::InvalidLocation(
            "latitude must be within [-90, 90]",
        ));
    }
    if !(frame.ramc_deg.is_finite()
        && frame.obliquity_deg.is_finite()
        && frame.ayanamsa_deg.is_finite())
    {
        return Err(VedicError::InvalidInput(
            "non-finite house frame".to_string(),
        ));
    }
    Ok(())
}

fn whole_sign_cusps(lagna: f64) -> [f64; 12] {
    let first = (lagna / 30.0).floor() * 30.0;
    std::array::from_fn(|i| normalize_360(first + i as f64 * 30.0))
}

fn equal_cusps(lagna: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_360(lagna + i as f64 * 30.0))
}

/// Placidus cusps, tropical degrees.
///
/// Cusps 1/4/7/10 are the angles. 11 and 12 trisect the diurnal semi-arc
/// between MC and Asc; 2 and 3 trisect the nocturnal semi-arc between Asc
/// and IC. The remaining four are the opposites.
fn placidus_cusps(asc: f64, mc: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    cusps[0] = asc;
    cusps[9] = mc;
    cusps[6] = normalize_360(asc + 180.0);
    cusps[3] = normalize_360(mc + 180.0);

    cusps[10] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true);
    cusps[11] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true);
    cusps[1] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false);
    cusps[2] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false);

    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);
    cusps
}

/// One intermediate cusp by fixed-point iteration on right ascension.
///
/// Above the horizon: `RA = RAMC + f·DSA(δ)`.
/// Below the horizon: `RA = RAMC + 180° − f·NSA(δ)`.
/// `δ` is the declination of the ecliptic point at that RA.
fn placidus_cusp(ramc_deg: f64, lat_deg: f64, eps_deg: f64, fraction: f64, above: bool) -> f64 {
    let ramc = ramc_deg.to_radians();
    let lat = lat_deg.to_radians();
    let eps = eps_deg.to_radians();

    let step = |ra: f64| {
        let dec = (eps.tan() * ra.sin()).atan();
        let ascensional_diff = (lat.tan() * dec.tan()).clamp(-1.0, 1.0).asin();
        if above {
            ramc + fraction * (FRAC_PI_2 + ascensional_diff)
        } else {
            ramc + std::f64::consts::PI - fraction * (FRAC_PI_2 - ascensional_diff)
        }
    };

    let mut ra = if above {
        ramc + fraction * FRAC_PI_2
    } else {
        ramc + std::f64::consts::PI - fraction * FRAC_PI_2
    };
    for _ in 0..PLACIDUS_MAX_ITER {
        let next = step(ra);
        let done = (next - ra).abs() < PLACIDUS_TOLERANCE_RAD;
        ra = next;
        if done {
            break;
        }
    }
    ecliptic_longitude_of_ra_deg(ra.to_degrees(), eps_deg)
}

fn build_bhavas(cusps: &[f64; 12]) -> [Bhava; 12] {
    std::array::from_fn(|i| Bhava {
        number: i as u8 + 1,
        cusp_deg: cusps[i],
        start_deg: cusps[i],
        end_deg: cusps[(i + 1) % 12],
    })
}
