//! Shadbala and Ashtakavarga from natal positions.

use kundali_vedic::{
    Graha, Rashi, SAPTA_GRAHAS, ShadbalaBreakdown, ShadbalaInputs, all_shadbalas,
    calculate_ashtakavarga, rashi_from_longitude,
};
use serde::Serialize;
use tracing::debug;

use crate::chart::{House, PlanetPosition, check_houses, positions_by_graha};
use crate::error::EngineError;

/// Six-fold strength of one graha, in virupas.
pub type ShadbalaResult = ShadbalaBreakdown;

/// Shadbala for the seven sapta grahas, Sun .. Saturn.
///
/// The first house cusp stands in for the ascendant when judging day and
/// night birth; for whole-sign houses that is the start of the rising sign.
pub fn compute_shadbala(
    planets: &[PlanetPosition],
    houses: &[House],
) -> Result<Vec<ShadbalaResult>, EngineError> {
    check_houses(houses)?;
    let ordered = positions_by_graha(planets)?;
    debug!("computing shadbala");

    let inputs = ShadbalaInputs {
        sidereal_lons: ordered.map(|p| p.longitude),
        speeds: std::array::from_fn(|i| ordered[i].speed_deg_per_day),
        bhava_numbers: std::array::from_fn(|i| ordered[i].house),
        lagna_deg: houses[0].cusp_longitude,
    };
    Ok(all_shadbalas(&inputs)?)
}

/// Bindus of one graha's Bhinna Ashtakavarga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetBindus {
    pub body: Graha,
    /// Index 0 = house 1 (the ascendant sign).
    pub by_house: [u8; 12],
    /// Index 0 = Aries.
    pub by_sign: [u8; 12],
    pub total_bindus: u8,
}

/// Ashtakavarga of a chart: per-graha bindus plus the Sarva heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AshtakavargaReport {
    /// Sign of house 1, 1..12.
    pub ascendant_sign: u8,
    pub planets: Vec<PlanetBindus>,
    /// Sarva Ashtakavarga per house, index 0 = house 1.
    pub heatmap: [u8; 12],
    /// Sarva Ashtakavarga per sign, index 0 = Aries.
    pub sav_by_sign: [u8; 12],
    /// Sarva per sign after trikona reduction.
    pub sav_after_trikona: [u8; 12],
    /// Sarva per sign after trikona then ekadhipatya reduction.
    pub sav_after_ekadhipatya: [u8; 12],
    pub total_bindus: u16,
}

impl AshtakavargaReport {
    /// House with the most Sarva bindus; ties go to the lower house.
    pub fn strongest_house(&self) -> (u8, u8) {
        let mut best = (1, self.heatmap[0]);
        for (i, &b) in self.heatmap.iter().enumerate().skip(1) {
            if b > best.1 {
                best = (i as u8 + 1, b);
            }
        }
        best
    }

    /// House with the fewest Sarva bindus; ties go to the lower house.
    pub fn weakest_house(&self) -> (u8, u8) {
        let mut worst = (1, self.heatmap[0]);
        for (i, &b) in self.heatmap.iter().enumerate().skip(1) {
            if b < worst.1 {
                worst = (i as u8 + 1, b);
            }
        }
        worst
    }
}

/// Ashtakavarga with house 1 at the sign of the first cusp.
pub fn compute_ashtakavarga(
    planets: &[PlanetPosition],
    houses: &[House],
) -> Result<AshtakavargaReport, EngineError> {
    check_houses(houses)?;
    let ordered = positions_by_graha(planets)?;
    debug!("computing ashtakavarga");

    let rashis: [Rashi; 7] =
        SAPTA_GRAHAS.map(|g| rashi_from_longitude(ordered[g.index() as usize].longitude).rashi);
    let lagna = rashi_from_longitude(houses[0].cusp_longitude).rashi;
    let result = calculate_ashtakavarga(&rashis, lagna);

    Ok(AshtakavargaReport {
        ascendant_sign: lagna.number(),
        planets: result
            .bavs
            .iter()
            .map(|bav| PlanetBindus {
                body: bav.graha,
                by_house: bav.by_house,
                by_sign: bav.by_rashi,
                total_bindus: bav.total(),
            })
            .collect(),
        heatmap: result.sav.by_house,
        sav_by_sign: result.sav.by_rashi,
        sav_after_trikona: result.sav.after_trikona,
        sav_after_ekadhipatya: result.sav.after_ekadhipatya,
        total_bindus: result.sav.total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::BirthDetails;
    use crate::chart::compute_natal_chart;
    use crate::config::ChartConfig;
    use chrono::{NaiveDate, NaiveTime};
    use kundali_vedic::{BAV_TOTALS, SAV_TOTAL, ShadbalaComponent};

    fn chart() -> crate::chart::NatalChart {
        let b = BirthDetails::new(
            "t",
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Asia/Kolkata",
            28.6139,
            77.2090,
        );
        compute_natal_chart(&b, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn shadbala_covers_sapta_grahas() {
        let c = chart();
        let sb = compute_shadbala(&c.planets, &c.houses).unwrap();
        let grahas: Vec<_> = sb.iter().map(|r| r.graha).collect();
        assert_eq!(grahas, SAPTA_GRAHAS.to_vec());
        for r in &sb {
            assert_eq!(r.components.len(), 11);
            assert!(r.components.values().all(|&v| v >= 0.0));
            let sum: f64 = r.components.values().sum();
            assert_eq!(sum, r.total);
            assert!(r.components.contains_key(&ShadbalaComponent::Naisargika));
        }
    }

    #[test]
    fn ashtakavarga_totals_are_fixed() {
        let c = chart();
        let report = compute_ashtakavarga(&c.planets, &c.houses).unwrap();
        assert_eq!(report.total_bindus, SAV_TOTAL);
        for (p, &expected) in report.planets.iter().zip(&BAV_TOTALS) {
            assert_eq!(p.total_bindus, expected);
            assert!(p.by_house.iter().all(|&b| b <= 8));
        }
        let heat: u16 = report.heatmap.iter().map(|&b| b as u16).sum();
        assert_eq!(heat, SAV_TOTAL);
    }

    #[test]
    fn house_one_is_ascendant_sign() {
        let c = chart();
        let report = compute_ashtakavarga(&c.planets, &c.houses).unwrap();
        assert_eq!(report.ascendant_sign, c.ascendant_sign());
        let asc = report.ascendant_sign as usize - 1;
        assert_eq!(report.heatmap[0], report.sav_by_sign[asc]);
    }

    #[test]
    fn strongest_and_weakest_house() {
        let c = chart();
        let report = compute_ashtakavarga(&c.planets, &c.houses).unwrap();
        let (strong, most) = report.strongest_house();
        let (weak, least) = report.weakest_house();
        assert_eq!(report.heatmap[strong as usize - 1], most);
        assert_eq!(report.heatmap[weak as usize - 1], least);
        assert!(report.heatmap.iter().all(|&b| (least..=most).contains(&b)));
    }

    #[test]
    fn missing_planet_rejected() {
        let c = chart();
        assert!(compute_shadbala(&c.planets[..7], &c.houses).is_err());
        assert!(compute_ashtakavarga(&c.planets[..7], &c.houses).is_err());
    }
}
