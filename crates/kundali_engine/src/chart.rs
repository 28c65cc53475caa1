//! Natal chart: sidereal positions of the nine grahas plus the twelve houses.

use chrono::{DateTime, Utc};
use kundali_ephem::{
    Ayanamsa, Body, NodeMode, ayanamsa_deg, centuries_tt, mean_obliquity_deg, rahu_state,
    tropical_state,
};
use kundali_time::{check_span, datetime_to_jd, local_sidereal_time_deg};
use kundali_vedic::{
    ALL_GRAHAS, Bhava, BhavaResult, Graha, HouseFrame, HouseSystem, VedicError, arc_contains,
    compute_bhavas, house_of, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::birth::BirthDetails;
use crate::config::ChartConfig;
use crate::error::EngineError;

/// Sidereal position of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Graha,
    /// Sidereal longitude, degrees [0, 360).
    pub longitude: f64,
    /// 1 = Aries .. 12 = Pisces.
    pub sign: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Signed sidereal speed, degrees per day.
    pub speed_deg_per_day: f64,
    /// Always true for Rahu and Ketu.
    pub is_retrograde: bool,
    /// 1 = Ashwini .. 27 = Revati.
    pub nakshatra: u8,
    /// 1..4.
    pub pada: u8,
    /// 1..12.
    pub house: u8,
}

impl PlanetPosition {
    fn place(body: Graha, longitude: f64, speed: f64, bhavas: &[Bhava; 12]) -> Self {
        let longitude = normalize_360(longitude);
        let rashi = rashi_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            body,
            longitude,
            sign: rashi.rashi.number(),
            degree_in_sign: rashi.degrees_in_rashi,
            speed_deg_per_day: speed,
            is_retrograde: body.is_node() || speed < 0.0,
            nakshatra: nak.nakshatra.index() + 1,
            pada: nak.pada,
            house: house_of(bhavas, longitude),
        }
    }
}

/// One of the twelve houses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1..12.
    pub index: u8,
    /// Sidereal cusp, degrees [0, 360). The house runs to the next cusp.
    pub cusp_longitude: f64,
    /// Sign of the cusp, 1..12.
    pub sign: u8,
    /// Grahas in the house, in canonical order.
    pub occupying_planets: Vec<Graha>,
}

/// Complete natal chart. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub subject: String,
    pub instant_utc: DateTime<Utc>,
    /// Offset in effect at the birth place, seconds east of UTC.
    pub utc_offset_seconds: i32,
    pub jd_ut: f64,
    /// System requested by the birth record.
    pub house_system: HouseSystem,
    /// System actually used; differs only when a Placidus fallback applied.
    pub house_system_used: HouseSystem,
    pub ayanamsa: Ayanamsa,
    pub ayanamsa_degrees: f64,
    /// Node model Rahu and Ketu were placed with. Transits reuse it.
    #[serde(default)]
    pub node_mode: NodeMode,
    pub ascendant_degree: f64,
    pub midheaven_degree: f64,
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<House>,
}

impl NatalChart {
    pub fn planet(&self, body: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.body == body)
    }

    /// 1..12 sign of the ascendant.
    pub fn ascendant_sign(&self) -> u8 {
        rashi_from_longitude(self.ascendant_degree).rashi.number()
    }
}

/// Longitude and speed of every graha, indexed by [`Graha::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sky {
    pub longitudes: [f64; 9],
    pub speeds: [f64; 9],
}

const fn body_of(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal longitudes and speeds of the nine grahas at a UT Julian Day.
///
/// Ketu is placed opposite Rahu after the sidereal shift, so the pair is
/// exactly 180° apart.
pub(crate) fn sidereal_sky(
    jd_ut: f64,
    ayanamsa: Ayanamsa,
    node_mode: NodeMode,
    step: f64,
) -> Result<Sky, EngineError> {
    check_span(jd_ut)?;
    let aya = ayanamsa_deg(ayanamsa, centuries_tt(jd_ut));
    let aya_rate = (ayanamsa_deg(ayanamsa, centuries_tt(jd_ut + step))
        - ayanamsa_deg(ayanamsa, centuries_tt(jd_ut - step)))
        / (2.0 * step);

    let mut sky = Sky {
        longitudes: [0.0; 9],
        speeds: [0.0; 9],
    };
    for graha in ALL_GRAHAS {
        let state = match body_of(graha) {
            Some(body) => tropical_state(body, jd_ut, step)?,
            None if graha == Graha::Rahu => rahu_state(node_mode, jd_ut, step)?,
            None => continue,
        };
        let i = graha.index() as usize;
        sky.longitudes[i] = normalize_360(state.longitude_deg - aya);
        sky.speeds[i] = state.speed_deg_per_day - aya_rate;
    }
    let (rahu, ketu) = (Graha::Rahu.index() as usize, Graha::Ketu.index() as usize);
    sky.longitudes[ketu] = normalize_360(sky.longitudes[rahu] + 180.0);
    sky.speeds[ketu] = sky.speeds[rahu];
    Ok(sky)
}

fn house_frame(jd_ut: f64, birth: &BirthDetails) -> HouseFrame {
    let t = centuries_tt(jd_ut);
    HouseFrame {
        ramc_deg: local_sidereal_time_deg(jd_ut, birth.longitude),
        latitude_deg: birth.latitude,
        obliquity_deg: mean_obliquity_deg(t),
        ayanamsa_deg: ayanamsa_deg(birth.ayanamsa, t),
    }
}

fn erect_houses(
    system: HouseSystem,
    frame: &HouseFrame,
    config: &ChartConfig,
) -> Result<BhavaResult, EngineError> {
    match compute_bhavas(system, frame) {
        Err(VedicError::UndefinedAtLatitude { latitude_deg, .. }) => {
            let Some(fallback) = config.placidus_fallback else {
                return Err(EngineError::HouseSystemUndefinedAtLatitude {
                    system,
                    latitude: latitude_deg,
                });
            };
            warn!(
                requested = %system,
                fallback = %fallback,
                latitude = latitude_deg,
                "house system undefined at latitude, using configured fallback"
            );
            Ok(compute_bhavas(fallback, frame)?)
        }
        other => Ok(other?),
    }
}

fn build_houses(bhavas: &[Bhava; 12], planets: &[PlanetPosition]) -> Vec<House> {
    bhavas
        .iter()
        .map(|b| House {
            index: b.number,
            cusp_longitude: b.cusp_deg,
            sign: rashi_from_longitude(b.cusp_deg).rashi.number(),
            occupying_planets: planets
                .iter()
                .filter(|p| p.house == b.number)
                .map(|p| p.body)
                .collect(),
        })
        .collect()
}

/// Compute the natal chart of a birth record.
pub fn compute_natal_chart(
    birth: &BirthDetails,
    config: &ChartConfig,
) -> Result<NatalChart, EngineError> {
    birth.validate()?;
    config.validate()?;
    let resolved = birth.resolve_instant()?;
    let jd_ut = datetime_to_jd(&resolved.utc);
    debug!(
        subject = %birth.name,
        instant = %resolved.utc,
        jd_ut,
        house_system = %birth.house_system,
        ayanamsa = %birth.ayanamsa,
        "computing natal chart"
    );

    let sky = sidereal_sky(
        jd_ut,
        birth.ayanamsa,
        config.node_mode,
        config.speed_step_days,
    )?;
    let frame = house_frame(jd_ut, birth);
    let bhava = erect_houses(birth.house_system, &frame, config)?;

    let planets: Vec<PlanetPosition> = ALL_GRAHAS
        .iter()
        .map(|&g| {
            let i = g.index() as usize;
            PlanetPosition::place(g, sky.longitudes[i], sky.speeds[i], &bhava.bhavas)
        })
        .collect();
    let houses = build_houses(&bhava.bhavas, &planets);

    Ok(NatalChart {
        subject: birth.name.clone(),
        instant_utc: resolved.utc,
        utc_offset_seconds: resolved.offset_seconds,
        jd_ut,
        house_system: birth.house_system,
        house_system_used: bhava.system,
        ayanamsa: birth.ayanamsa,
        ayanamsa_degrees: frame.ayanamsa_deg,
        node_mode: config.node_mode,
        ascendant_degree: bhava.lagna_deg,
        midheaven_degree: bhava.mc_deg,
        planets,
        houses,
    })
}

/// Positions reordered by [`Graha::index`]. Every graha must be present once.
pub(crate) fn positions_by_graha(
    planets: &[PlanetPosition],
) -> Result<[PlanetPosition; 9], EngineError> {
    let mut slots: [Option<PlanetPosition>; 9] = [None; 9];
    for p in planets {
        if !(p.longitude.is_finite() && p.speed_deg_per_day.is_finite()) {
            return Err(EngineError::InvalidInput(format!(
                "{} has a non-finite position",
                p.body.english_name()
            )));
        }
        let slot = &mut slots[p.body.index() as usize];
        if slot.is_some() {
            return Err(EngineError::InvalidInput(format!(
                "{} listed twice",
                p.body.english_name()
            )));
        }
        *slot = Some(*p);
    }
    let mut out = Vec::with_capacity(9);
    for (graha, slot) in ALL_GRAHAS.iter().zip(slots) {
        out.push(slot.ok_or_else(|| {
            EngineError::InvalidInput(format!("missing position for {}", graha.english_name()))
        })?);
    }
    out.try_into()
        .map_err(|_| EngineError::InvalidInput("expected nine positions".to_string()))
}

/// Check that `houses` holds houses 1..12 in order.
pub(crate) fn check_houses(houses: &[House]) -> Result<(), EngineError> {
    if houses.len() != 12 {
        return Err(EngineError::InvalidInput(format!(
            "expected 12 houses, got {}",
            houses.len()
        )));
    }
    for (i, h) in houses.iter().enumerate() {
        if h.index as usize != i + 1 || !h.cusp_longitude.is_finite() {
            return Err(EngineError::InvalidInput(format!(
                "house {} is malformed",
                i + 1
            )));
        }
    }
    Ok(())
}

/// House whose arc `[cusp_n, cusp_n+1)` contains `longitude`.
pub(crate) fn house_containing(houses: &[House], longitude: f64) -> u8 {
    let lon = normalize_360(longitude);
    houses
        .iter()
        .zip(houses.iter().cycle().skip(1))
        .find(|(h, next)| arc_contains(h.cusp_longitude, next.cusp_longitude, lon))
        .map(|(h, _)| h.index)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, NaiveTime};

    fn birth(lat: f64, system: HouseSystem) -> BirthDetails {
        BirthDetails::new(
            "t",
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Asia/Kolkata",
            lat,
            77.2090,
        )
        .with_house_system(system)
    }

    fn chart_at(lat: f64, system: HouseSystem) -> NatalChart {
        compute_natal_chart(&birth(lat, system), &ChartConfig::default()).unwrap()
    }

    #[test]
    fn nine_planets_twelve_houses() {
        let chart = chart_at(28.6139, HouseSystem::Whole);
        assert_eq!(chart.planets.len(), 9);
        assert_eq!(chart.houses.len(), 12);
        let occupants: usize = chart.houses.iter().map(|h| h.occupying_planets.len()).sum();
        assert_eq!(occupants, 9);
    }

    #[test]
    fn sun_in_sidereal_capricorn_mid_january() {
        let chart = chart_at(28.6139, HouseSystem::Whole);
        let sun = chart.planet(Graha::Surya).unwrap();
        // Tropical ~294.8°, minus Lahiri ~23.7° → ~271.1° sidereal.
        assert_eq!(sun.sign, 10);
        assert!((270.0..273.0).contains(&sun.longitude), "{}", sun.longitude);
        assert!(!sun.is_retrograde);
    }

    #[test]
    fn nodes_opposite_and_retrograde() {
        let chart = chart_at(28.6139, HouseSystem::Whole);
        let rahu = chart.planet(Graha::Rahu).unwrap();
        let ketu = chart.planet(Graha::Ketu).unwrap();
        let d = normalize_360(ketu.longitude - rahu.longitude);
        assert_abs_diff_eq!(d, 180.0, epsilon = 1e-6);
        assert!(rahu.is_retrograde && ketu.is_retrograde);
    }

    #[test]
    fn tropical_differs_by_ayanamsa() {
        let b = birth(28.6139, HouseSystem::Whole);
        let sid = compute_natal_chart(&b, &ChartConfig::default()).unwrap();
        let tropical = b.clone().with_ayanamsa(Ayanamsa::Tropical);
        let trop = compute_natal_chart(&tropical, &ChartConfig::default()).unwrap();
        assert_eq!(trop.ayanamsa_degrees, 0.0);
        let sun = |c: &NatalChart| c.planet(Graha::Surya).unwrap().longitude;
        let d = normalize_360(sun(&trop) - sun(&sid));
        assert_abs_diff_eq!(d, sid.ayanamsa_degrees, epsilon = 1e-9);
    }

    #[test]
    fn polar_placidus_errors_without_fallback() {
        let b = birth(70.0, HouseSystem::Placidus);
        let err = compute_natal_chart(&b, &ChartConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::HouseSystemUndefinedAtLatitude { system: HouseSystem::Placidus, latitude }
                if latitude == 70.0
        ));
    }

    #[test]
    fn polar_placidus_uses_explicit_fallback() {
        let config = ChartConfig {
            placidus_fallback: Some(HouseSystem::Equal),
            ..ChartConfig::default()
        };
        let chart = compute_natal_chart(&birth(70.0, HouseSystem::Placidus), &config).unwrap();
        assert_eq!(chart.house_system, HouseSystem::Placidus);
        assert_eq!(chart.house_system_used, HouseSystem::Equal);
        assert_abs_diff_eq!(
            chart.houses[0].cusp_longitude,
            chart.ascendant_degree,
            epsilon = 1e-9
        );
    }

    #[test]
    fn date_outside_span() {
        let mut b = birth(28.6139, HouseSystem::Whole);
        b.date_of_birth = NaiveDate::from_ymd_opt(1750, 6, 1).unwrap();
        assert!(matches!(
            compute_natal_chart(&b, &ChartConfig::default()),
            Err(EngineError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn house_containing_matches_mapper() {
        let chart = chart_at(28.6139, HouseSystem::Placidus);
        for p in &chart.planets {
            assert_eq!(
                house_containing(&chart.houses, p.longitude),
                p.house,
                "{:?}",
                p.body
            );
        }
    }

    #[test]
    fn positions_by_graha_rejects_gaps() {
        let chart = chart_at(28.6139, HouseSystem::Whole);
        assert!(positions_by_graha(&chart.planets).is_ok());
        assert!(positions_by_graha(&chart.planets[..8]).is_err());
        let mut doubled = chart.planets.clone();
        doubled[8] = doubled[0];
        assert!(positions_by_graha(&doubled).is_err());
    }
}
