//! Transit comparator: current sky against natal positions.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use kundali_ephem::signed_arc_deg;
use kundali_time::datetime_to_jd;
use kundali_vedic::{ALL_GRAHAS, Graha, rashi_from_longitude};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{NatalChart, check_houses, house_containing, positions_by_graha, sidereal_sky};
use crate::config::{EngineConfig, TransitConfig};
use crate::error::EngineError;

/// How close a transiting body is to its natal degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitFlag {
    Conjunction,
    Notable,
    None,
}

impl TransitFlag {
    fn classify(difference: f64, orbs: &TransitConfig) -> Self {
        let d = difference.abs();
        if d < orbs.conjunction_orb {
            Self::Conjunction
        } else if d < orbs.notable_orb {
            Self::Notable
        } else {
            Self::None
        }
    }
}

/// One body's transit against its own natal position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitEntry {
    pub body: Graha,
    /// Sidereal longitude at the target instant, same ayanamsa as the chart.
    pub current_longitude: f64,
    pub current_sign: u8,
    /// Natal house whose arc holds the transiting longitude.
    pub current_house: u8,
    pub natal_longitude: f64,
    /// `current − natal`, degrees in (−180, 180].
    pub difference_degrees: f64,
    pub is_retrograde: bool,
    pub flag: TransitFlag,
}

fn transit_order(a: &TransitEntry, b: &TransitEntry) -> Ordering {
    a.flag.cmp(&b.flag).then_with(|| match a.flag {
        TransitFlag::None => a.body.index().cmp(&b.body.index()),
        _ => a
            .difference_degrees
            .abs()
            .total_cmp(&b.difference_degrees.abs())
            .then_with(|| a.body.index().cmp(&b.body.index())),
    })
}

/// Compare the sky at `at` (now when `None`) with the natal chart.
///
/// Rahu and Ketu follow the node model the chart was built with, whatever
/// `config.chart.node_mode` says.
///
/// Conjunctions come first by ascending |difference|, then notables the
/// same way, then the rest in canonical graha order.
pub fn compute_transit(
    natal: &NatalChart,
    at: Option<DateTime<Utc>>,
    config: &EngineConfig,
) -> Result<Vec<TransitEntry>, EngineError> {
    config.chart.validate()?;
    config.transit.validate()?;
    check_houses(&natal.houses)?;
    let natal_positions = positions_by_graha(&natal.planets)?;

    let at = at.unwrap_or_else(Utc::now);
    let jd = datetime_to_jd(&at);
    debug!(subject = %natal.subject, instant = %at, jd, "computing transit");
    let sky = sidereal_sky(
        jd,
        natal.ayanamsa,
        natal.node_mode,
        config.chart.speed_step_days,
    )?;

    let mut entries: Vec<TransitEntry> = ALL_GRAHAS
        .iter()
        .map(|&body| {
            let i = body.index() as usize;
            let current = sky.longitudes[i];
            let natal_lon = natal_positions[i].longitude;
            let difference = signed_arc_deg(natal_lon, current);
            TransitEntry {
                body,
                current_longitude: current,
                current_sign: rashi_from_longitude(current).rashi.number(),
                current_house: house_containing(&natal.houses, current),
                natal_longitude: natal_lon,
                difference_degrees: difference,
                is_retrograde: body.is_node() || sky.speeds[i] < 0.0,
                flag: TransitFlag::classify(difference, &config.transit),
            }
        })
        .collect();
    entries.sort_by(transit_order);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::BirthDetails;
    use crate::chart::compute_natal_chart;
    use crate::config::ChartConfig;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use kundali_ephem::NodeMode;

    fn natal() -> NatalChart {
        let b = BirthDetails::new(
            "t",
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Asia/Kolkata",
            28.6139,
            77.2090,
        );
        compute_natal_chart(&b, &EngineConfig::default().chart).unwrap()
    }

    #[test]
    fn same_instant_is_all_conjunctions_at_zero() {
        let chart = natal();
        let entries =
            compute_transit(&chart, Some(chart.instant_utc), &EngineConfig::default()).unwrap();
        assert_eq!(entries.len(), 9);
        for e in &entries {
            assert_eq!(e.difference_degrees, 0.0, "{:?}", e.body);
            assert_eq!(e.flag, TransitFlag::Conjunction);
            assert_eq!(e.current_house, chart.planet(e.body).unwrap().house);
        }
        // All tied at zero: canonical order.
        let bodies: Vec<Graha> = entries.iter().map(|e| e.body).collect();
        assert_eq!(bodies, ALL_GRAHAS.to_vec());
    }

    #[test]
    fn ordering_groups_by_flag() {
        let chart = natal();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let entries = compute_transit(&chart, Some(at), &EngineConfig::default()).unwrap();
        for pair in entries.windows(2) {
            assert_ne!(transit_order(&pair[0], &pair[1]), Ordering::Greater);
        }
        for e in &entries {
            assert!(e.difference_degrees > -180.0 && e.difference_degrees <= 180.0);
        }
    }

    #[test]
    fn nodes_follow_the_chart_node_mode() {
        let b = BirthDetails::new(
            "t",
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Asia/Kolkata",
            28.6139,
            77.2090,
        );
        let true_nodes = ChartConfig {
            node_mode: NodeMode::True,
            ..ChartConfig::default()
        };
        let chart = compute_natal_chart(&b, &true_nodes).unwrap();
        assert_eq!(chart.node_mode, NodeMode::True);
        // Default config asks for mean nodes; the chart's own model wins.
        let entries =
            compute_transit(&chart, Some(chart.instant_utc), &EngineConfig::default()).unwrap();
        for e in &entries {
            assert_eq!(e.difference_degrees, 0.0, "{:?}", e.body);
            assert_eq!(e.flag, TransitFlag::Conjunction);
        }
    }

    #[test]
    fn flag_thresholds() {
        let orbs = TransitConfig::default();
        let classify = |d: f64| TransitFlag::classify(d, &orbs);
        assert_eq!(classify(0.0), TransitFlag::Conjunction);
        assert_eq!(classify(-4.99), TransitFlag::Conjunction);
        assert_eq!(classify(5.0), TransitFlag::Notable);
        assert_eq!(classify(-9.99), TransitFlag::Notable);
        assert_eq!(classify(10.0), TransitFlag::None);
        assert_eq!(classify(180.0), TransitFlag::None);
    }

    #[test]
    fn out_of_span_target() {
        let chart = natal();
        let at = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            compute_transit(&chart, Some(at), &EngineConfig::default()),
            Err(EngineError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn defaults_to_now() {
        let chart = natal();
        // Only fails once the current date leaves the supported span.
        let entries = compute_transit(&chart, None, &EngineConfig::default()).unwrap();
        assert_eq!(entries.len(), 9);
    }
}
