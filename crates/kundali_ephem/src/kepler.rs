//! Planetary positions from Keplerian mean elements.
//!
//! Elements and rates are the JPL approximate elements of Standish (Table 1,
//! valid 1800–2050), referred to the mean ecliptic and equinox of J2000.
//! Geocentric longitudes are formed by subtracting the Earth–Moon
//! barycentre, correcting for light time, and precessing to the equinox of
//! date. Accuracy is a few arcminutes, well inside a degree of sign.

use crate::precession::j2000_to_date_deg;

/// Speed of light expressed as days per astronomical unit.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Bodies with Keplerian element sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeplerBody {
    Mercury,
    Venus,
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
}

/// `[value at J2000, rate per Julian century]` for a, e, I, L, ϖ, Ω.
/// Units: au and degrees.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    i: [f64; 2],
    l: [f64; 2],
    peri: [f64; 2],
    node: [f64; 2],
}

#[rustfmt::skip]
const fn elements(body: KeplerBody) -> Elements {
    match body {
        KeplerBody::Mercury => Elements {
            a: [0.387_099_27, 0.000_000_37], e: [0.205_635_93, 0.000_019_06],
            i: [7.004_979_02, -0.005_947_49], l: [252.250_323_50, 149_472.674_111_75],
            peri: [77.457_796_28, 0.160_476_89], node: [48.330_765_93, -0.125_340_81],
        },
        KeplerBody::Venus => Elements {
            a: [0.723_335_66, 0.000_003_90], e: [0.006_776_72, -0.000_041_07],
            i: [3.394_676_05, -0.000_788_90], l: [181.979_099_50, 58_517.815_387_29],
            peri: [131.602_467_18, 0.002_683_29], node: [76.679_842_55, -0.277_694_18],
        },
        KeplerBody::EarthMoonBary => Elements {
            a: [1.000_002_61, 0.000_005_62], e: [0.016_711_23, -0.000_043_92],
            i: [-0.000_015_31, -0.012_946_68], l: [100.464_571_66, 35_999.372_449_81],
            peri: [102.937_681_93, 0.323_273_64], node: [0.0, 0.0],
        },
        KeplerBody::Mars => Elements {
            a: [1.523_710_34, 0.000_018_47], e: [0.093_394_10, 0.000_078_82],
            i: [1.849_691_42, -0.008_131_31], l: [-4.553_432_05, 19_140.302_684_99],
            peri: [-23.943_629_59, 0.444_410_88], node: [49.559_538_91, -0.292_573_43],
        },
        KeplerBody::Jupiter => Elements {
            a: [5.202_887_00, -0.000_116_07], e: [0.048_386_24, -0.000_132_53],
            i: [1.304_396_95, -0.001_837_14], l: [34.396_440_51, 3_034.746_127_75],
            peri: [14.728_479_83, 0.212_526_68], node: [100.473_909_09, 0.204_691_06],
        },
        KeplerBody::Saturn => Elements {
            a: [9.536_675_94, -0.001_250_60], e: [0.053_861_79, -0.000_509_91],
            i: [2.485_991_87, 0.001_936_09], l: [49.954_244_23, 1_222.493_622_01],
            peri: [92.598_878_31, -0.418_972_16], node: [113.662_424_48, -0.288_677_94],
        },
    }
}

fn at(pair: [f64; 2], t: f64) -> f64 {
    pair[0] + pair[1] * t
}

/// Solve Kepler's equation E − e·sin E = M by Newton iteration (radians).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anom = if e < 0.8 { mean_anomaly } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta = (ecc_anom - e * ecc_anom.sin() - mean_anomaly) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric ecliptic rectangular coordinates (au), J2000 frame.
pub fn heliocentric_xyz(body: KeplerBody, t: f64) -> [f64; 3] {
    let el = elements(body);
    let a = at(el.a, t);
    let e = at(el.e, t);
    let inc = at(el.i, t).to_radians();
    let l = at(el.l, t);
    let peri = at(el.peri, t);
    let node = at(el.node, t);

    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    // M in (-180, 180]
    let m = (l - peri + 180.0).rem_euclid(360.0) - 180.0;
    let ecc_anom = solve_kepler(m.to_radians(), e);

    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = inc.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric ecliptic longitude of a planet in degrees [0, 360), mean
/// equinox of date. `t` is Julian centuries of TT since J2000.0.
///
/// `KeplerBody::EarthMoonBary` yields the geocentric Sun.
pub fn planet_longitude_deg(body: KeplerBody, t: f64) -> f64 {
    let earth = heliocentric_xyz(KeplerBody::EarthMoonBary, t);
    if body == KeplerBody::EarthMoonBary {
        let lon = f64::atan2(-earth[1], -earth[0]).to_degrees();
        return j2000_to_date_deg(lon, t);
    }

    let geometric = geocentric(body, t, &earth);
    let distance = geometric.iter().map(|c| c * c).sum::<f64>().sqrt();
    let tau_centuries = distance * LIGHT_TIME_DAYS_PER_AU / 36_525.0;
    let retarded = geocentric(body, t - tau_centuries, &earth);

    let lon = f64::atan2(retarded[1], retarded[0]).to_degrees();
    j2000_to_date_deg(lon, t)
}

fn geocentric(body: KeplerBody, t: f64, earth: &[f64; 3]) -> [f64; 3] {
    let p = heliocentric_xyz(body, t);
    [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
}
