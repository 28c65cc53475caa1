//! Analytic geocentric ephemeris for chart work.
//!
//! All longitudes are geocentric, ecliptic, referred to the mean equinox of
//! date, in degrees [0, 360). Time arguments are UT Julian Days at the public
//! surface; the theories are evaluated in TT internally.
//!
//! Theories:
//! - Sun: Meeus ch. 25
//! - Moon: truncated ELP-2000/82, Meeus ch. 47
//! - Mercury..Saturn: JPL Keplerian mean elements (1800–2050)
//! - Lunar nodes: mean or true, Meeus ch. 47

pub mod ayanamsa;
pub mod error;
pub mod kepler;
pub mod lunar;
pub mod nodes;
pub mod precession;
pub mod solar;

use kundali_time::{check_span, jd_to_centuries, ut_to_tt_jd};

pub use ayanamsa::{Ayanamsa, ayanamsa_deg, tropical_to_sidereal};
pub use error::EphemError;
pub use kepler::KeplerBody;
pub use nodes::{LunarNode, NodeMode, lunar_node_deg};
pub use precession::{general_precession_longitude_deg, mean_obliquity_deg};

/// Physical bodies with an ephemeris theory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All physical bodies, in weekday (Vara) order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
];

/// Tropical geocentric longitude at `t` Julian centuries of TT since J2000.0.
pub fn tropical_longitude_deg(body: Body, t: f64) -> f64 {
    match body {
        Body::Sun => solar::sun_longitude_deg(t),
        Body::Moon => lunar::moon_longitude_deg(t),
        Body::Mercury => kepler::planet_longitude_deg(KeplerBody::Mercury, t),
        Body::Venus => kepler::planet_longitude_deg(KeplerBody::Venus, t),
        Body::Mars => kepler::planet_longitude_deg(KeplerBody::Mars, t),
        Body::Jupiter => kepler::planet_longitude_deg(KeplerBody::Jupiter, t),
        Body::Saturn => kepler::planet_longitude_deg(KeplerBody::Saturn, t),
    }
}

/// Longitude and its rate of change at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticState {
    /// Longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Central-difference rate, degrees per day. Negative means retrograde.
    pub speed_deg_per_day: f64,
}

/// Julian centuries of TT for a UT Julian Day.
pub fn centuries_tt(jd_ut: f64) -> f64 {
    jd_to_centuries(ut_to_tt_jd(jd_ut))
}

/// Signed shortest arc `to − from`, degrees in (−180, 180].
pub fn signed_arc_deg(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

fn state_from<F: Fn(f64) -> f64>(
    longitude_at: F,
    jd_ut: f64,
    step_days: f64,
) -> Result<EclipticState, EphemError> {
    check_span(jd_ut)?;
    if !(step_days.is_finite() && step_days > 0.0) {
        return Err(EphemError::InvalidStep(step_days));
    }
    let before = longitude_at(centuries_tt(jd_ut - step_days));
    let after = longitude_at(centuries_tt(jd_ut + step_days));
    Ok(EclipticState {
        longitude_deg: longitude_at(centuries_tt(jd_ut)),
        speed_deg_per_day: signed_arc_deg(before, after) / (2.0 * step_days),
    })
}

/// Tropical longitude and speed of a body at a UT Julian Day.
///
/// `step_days` is the half-width of the central difference used for speed.
pub fn tropical_state(body: Body, jd_ut: f64, step_days: f64) -> Result<EclipticState, EphemError> {
    state_from(|t| tropical_longitude_deg(body, t), jd_ut, step_days)
}

/// Tropical longitude and speed of Rahu at a UT Julian Day.
pub fn rahu_state(mode: NodeMode, jd_ut: f64, step_days: f64) -> Result<EclipticState, EphemError> {
    state_from(
        |t| lunar_node_deg(LunarNode::Rahu, t, mode),
        jd_ut,
        step_days,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::calendar_to_jd;

    #[test]
    fn signed_arc_range() {
        assert_eq!(signed_arc_deg(10.0, 10.0), 0.0);
        assert_eq!(signed_arc_deg(350.0, 10.0), 20.0);
        assert_eq!(signed_arc_deg(10.0, 350.0), -20.0);
        assert_eq!(signed_arc_deg(0.0, 180.0), 180.0);
        assert_eq!(signed_arc_deg(180.0, 0.0), 180.0);
    }

    #[test]
    fn all_longitudes_in_range() {
        let jd = calendar_to_jd(1990, 1, 15.2);
        for body in ALL_BODIES {
            let s = tropical_state(body, jd, 0.5).unwrap();
            assert!((0.0..360.0).contains(&s.longitude_deg), "{body:?}");
        }
    }

    #[test]
    fn sun_and_moon_never_retrograde() {
        let jd = calendar_to_jd(2020, 10, 15.0);
        for body in [Body::Sun, Body::Moon] {
            assert!(tropical_state(body, jd, 0.5).unwrap().speed_deg_per_day > 0.0);
        }
    }

    #[test]
    fn mean_rahu_is_retrograde() {
        let jd = calendar_to_jd(2020, 10, 15.0);
        let rahu = rahu_state(NodeMode::Mean, jd, 0.5).unwrap();
        assert!(rahu.speed_deg_per_day < 0.0);
    }

    #[test]
    fn out_of_span_rejected() {
        let jd = calendar_to_jd(1700, 1, 1.0);
        let err = tropical_state(Body::Sun, jd, 0.5).unwrap_err();
        assert!(matches!(err, EphemError::Time(_)));
    }

    #[test]
    fn bad_step_rejected() {
        let jd = calendar_to_jd(2000, 1, 1.0);
        assert!(matches!(
            tropical_state(Body::Sun, jd, 0.0),
            Err(EphemError::InvalidStep(_))
        ));
    }
}
