//! Divisional (varga) charts derived from natal positions.

use kundali_vedic::{Amsha, Graha, amsha_position, rashi_from_longitude};
use serde::Serialize;
use tracing::debug;

use crate::birth::BirthDetails;
use crate::chart::{House, PlanetPosition, check_houses, house_containing, positions_by_graha};
use crate::error::EngineError;

/// Where one graha lands in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionalPlacement {
    pub body: Graha,
    /// Natal sign, 1..12.
    pub natal_sign: u8,
    /// Natal house, 1..12.
    pub natal_house: u8,
    /// 1-based part of the natal sign the longitude falls in.
    pub part: u16,
    /// Divisional sign, 1..12.
    pub sign: u8,
    /// Divisional longitude, degrees [0, 360).
    pub longitude: f64,
}

/// A remapped set of signs. Vargas carry no houses of their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub subject: String,
    pub code: Amsha,
    pub name: String,
    pub divisions: u16,
    pub placements: Vec<DivisionalPlacement>,
}

/// Derive the divisional chart named by `code` (`"D9"`, `"d10"`, `"navamsha"`, ...).
pub fn compute_divisions(
    birth: &BirthDetails,
    code: &str,
    planets: &[PlanetPosition],
    houses: &[House],
) -> Result<DivisionalChart, EngineError> {
    let amsha: Amsha = code.parse()?;
    check_houses(houses)?;
    let ordered = positions_by_graha(planets)?;
    debug!(subject = %birth.name, code = %amsha, "computing divisional chart");

    let placements = ordered
        .iter()
        .map(|p| {
            let pos = amsha_position(p.longitude, amsha);
            DivisionalPlacement {
                body: p.body,
                natal_sign: rashi_from_longitude(p.longitude).rashi.number(),
                natal_house: house_containing(houses, p.longitude),
                part: pos.part,
                sign: pos.rashi.number(),
                longitude: pos.longitude,
            }
        })
        .collect();

    Ok(DivisionalChart {
        subject: birth.name.clone(),
        code: amsha,
        name: amsha.sanskrit_name().to_string(),
        divisions: amsha.divisions(),
        placements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_natal_chart;
    use crate::config::ChartConfig;
    use chrono::{NaiveDate, NaiveTime};

    fn birth() -> BirthDetails {
        BirthDetails::new(
            "t",
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Asia/Kolkata",
            28.6139,
            77.2090,
        )
    }

    #[test]
    fn d1_is_identity() {
        let b = birth();
        let chart = compute_natal_chart(&b, &ChartConfig::default()).unwrap();
        let d1 = compute_divisions(&b, "D1", &chart.planets, &chart.houses).unwrap();
        for (placement, planet) in d1.placements.iter().zip(&chart.planets) {
            assert_eq!(placement.sign, planet.sign);
            assert_eq!(placement.natal_house, planet.house);
        }
    }

    #[test]
    fn lowercase_code_accepted() {
        let b = birth();
        let chart = compute_natal_chart(&b, &ChartConfig::default()).unwrap();
        let d9 = compute_divisions(&b, "d9", &chart.planets, &chart.houses).unwrap();
        assert_eq!(d9.code, Amsha::D9);
        assert_eq!(d9.divisions, 9);
        assert_eq!(d9.placements.len(), 9);
        assert!(d9.placements.iter().all(|p| (1..=9).contains(&p.part)));
    }

    #[test]
    fn unknown_code() {
        let b = birth();
        let chart = compute_natal_chart(&b, &ChartConfig::default()).unwrap();
        let err = compute_divisions(&b, "D11", &chart.planets, &chart.houses).unwrap_err();
        assert_eq!(err, EngineError::UnsupportedDivisionalChart("D11".into()));
    }

    #[test]
    fn wrong_house_count() {
        let b = birth();
        let chart = compute_natal_chart(&b, &ChartConfig::default()).unwrap();
        assert!(matches!(
            compute_divisions(&b, "D9", &chart.planets, &chart.houses[..11]),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
