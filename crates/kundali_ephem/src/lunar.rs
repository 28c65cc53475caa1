//! Geocentric longitude of the Moon.
//!
//! Truncated ELP-2000/82 main problem as tabulated by Meeus,
//! "Astronomical Algorithms" (2nd ed), Chapter 47 (Table 47.A plus the
//! Venus/Jupiter additive terms). Accuracy is ~10″ in longitude.

/// Delaunay-style fundamental arguments of the lunar theory, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArgs {
    /// Moon's mean longitude L′.
    pub mean_longitude: f64,
    /// Mean elongation of the Moon D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: f64,
    /// Moon's argument of latitude F.
    pub latitude_argument: f64,
    /// Mean longitude of the ascending node Ω.
    pub node: f64,
}

/// Fundamental arguments at `t` Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> FundamentalArgs {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    FundamentalArgs {
        mean_longitude: (218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0
            - t4 / 65_194_000.0)
            .rem_euclid(360.0),
        elongation: (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0)
            .rem_euclid(360.0),
        sun_anomaly: (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
            + t3 / 24_490_000.0)
            .rem_euclid(360.0),
        moon_anomaly: (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0)
            .rem_euclid(360.0),
        latitude_argument: (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
            - t3 / 3_526_000.0
            + t4 / 863_310_000.0)
            .rem_euclid(360.0),
        node: (125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0)
            .rem_euclid(360.0),
    }
}

/// Periodic terms in longitude: multiples of (D, M, M′, F) and the
/// coefficient in 10⁻⁶ degrees.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 59] = [
    (0,  0,  1,  0, 6_288_774.0),
    (2,  0, -1,  0, 1_274_027.0),
    (2,  0,  0,  0,   658_314.0),
    (0,  0,  2,  0,   213_618.0),
    (0,  1,  0,  0,  -185_116.0),
    (0,  0,  0,  2,  -114_332.0),
    (2,  0, -2,  0,    58_793.0),
    (2, -1, -1,  0,    57_066.0),
    (2,  0,  1,  0,    53_322.0),
    (2, -1,  0,  0,    45_758.0),
    (0,  1, -1,  0,   -40_923.0),
    (1,  0,  0,  0,   -34_720.0),
    (0,  1,  1,  0,   -30_383.0),
    (2,  0,  0, -2,    15_327.0),
    (0,  0,  1,  2,   -12_528.0),
    (0,  0,  1, -2,    10_980.0),
    (4,  0, -1,  0,    10_675.0),
    (0,  0,  3,  0,    10_034.0),
    (4,  0, -2,  0,     8_548.0),
    (2,  1, -1,  0,    -7_888.0),
    (2,  1,  0,  0,    -6_766.0),
    (1,  0, -1,  0,    -5_163.0),
    (1,  1,  0,  0,     4_987.0),
    (2, -1,  1,  0,     4_036.0),
    (2,  0,  2,  0,     3_994.0),
    (4,  0,  0,  0,     3_861.0),
    (2,  0, -3,  0,     3_665.0),
    (0,  1, -2,  0,    -2_689.0),
    (2,  0, -1,  2,    -2_602.0),
    (2, -1, -2,  0,     2_390.0),
    (1,  0,  1,  0,    -2_348.0),
    (2, -2,  0,  0,     2_236.0),
    (0,  1,  2,  0,    -2_120.0),
    (0,  2,  0,  0,    -2_069.0),
    (2, -2, -1,  0,     2_048.0),
    (2,  0,  1, -2,    -1_773.0),
    (2,  0,  0,  2,    -1_595.0),
    (4, -1, -1,  0,     1_215.0),
    (0,  0,  2,  2,    -1_110.0),
    (3,  0, -1,  0,      -892.0),
    (2,  1,  1,  0,      -810.0),
    (4, -1, -2,  0,       759.0),
    (0,  2, -1,  0,      -713.0),
    (2,  2, -1,  0,      -700.0),
    (2,  1, -2,  0,       691.0),
    (2, -1,  0, -2,       596.0),
    (4,  0,  1,  0,       549.0),
    (0,  0,  4,  0,       537.0),
    (4, -1,  0,  0,       520.0),
    (1,  0, -2,  0,      -487.0),
    (2,  1,  0, -2,      -399.0),
    (0,  0,  2, -2,      -381.0),
    (1,  1,  1,  0,       351.0),
    (3,  0, -2,  0,      -340.0),
    (4,  0, -3,  0,       330.0),
    (2, -1,  2,  0,       327.0),
    (0,  2,  1,  0,      -323.0),
    (1,  1, -1,  0,       299.0),
    (2,  0,  3,  0,       294.0),
];

/// Sum of the periodic longitude terms, in 10⁻⁶ degrees.
fn longitude_series(args: &FundamentalArgs, t: f64) -> f64 {
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    let mut sum = 0.0_f64;
    for &(kd, km, kmp, kf, coeff) in &LONGITUDE_TERMS {
        let angle = kd as f64 * d + km as f64 * m + kmp as f64 * mp + kf as f64 * f;
        let ecc = match km.unsigned_abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += coeff * ecc * angle.sin();
    }

    let lp = args.mean_longitude.to_radians();
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum + 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin()
}

/// Geocentric longitude of the Moon, degrees [0, 360), mean equinox of date.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    (args.mean_longitude + longitude_series(&args, t) / 1.0e6).rem_euclid(360.0)
}
