//! Vimshottari dasha entry points.
//!
//! Periods are kept as UTC Julian Days; [`DatedPeriod`] adds calendar
//! instants for display.

use chrono::{DateTime, Utc};
use kundali_time::{datetime_to_jd, jd_to_datetime};
use kundali_vedic::dasha::{
    BirthBalance, DashaHierarchy, DashaLevel, DashaPeriod, active_chain, level_index,
    nakshatra_birth_balance, vimshottari_children, vimshottari_hierarchy as hierarchy_to_level,
    vimshottari_mahadashas,
};
use kundali_vedic::Graha;
use serde::Serialize;
use tracing::debug;

use crate::birth::BirthDetails;
use crate::chart::{PlanetPosition, positions_by_graha};
use crate::config::check_depth;
use crate::error::EngineError;

/// A dasha period with calendar instants alongside its Julian Days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatedPeriod {
    pub lord: Graha,
    pub level: DashaLevel,
    pub order: u16,
    pub parent_lord: Option<Graha>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl DatedPeriod {
    pub fn from_period(period: &DashaPeriod) -> Result<Self, EngineError> {
        Ok(Self {
            lord: period.lord,
            level: period.level,
            order: period.order,
            parent_lord: period.parent_lord,
            start: jd_to_datetime(period.start_jd)?,
            end: jd_to_datetime(period.end_jd)?,
            start_jd: period.start_jd,
            end_jd: period.end_jd,
        })
    }

    pub fn dated(periods: &[DashaPeriod]) -> Result<Vec<Self>, EngineError> {
        periods.iter().map(Self::from_period).collect()
    }
}

fn moon_longitude(planets: &[PlanetPosition]) -> Result<f64, EngineError> {
    Ok(positions_by_graha(planets)?[Graha::Chandra.index() as usize].longitude)
}

/// Birth nakshatra and the balance of the first mahadasha.
pub fn dasha_balance(planets: &[PlanetPosition]) -> Result<BirthBalance, EngineError> {
    Ok(nakshatra_birth_balance(moon_longitude(planets)?))
}

/// Mahadasha sequence from birth, spanning exactly 120 years.
pub fn compute_vimshottari(
    birth: &BirthDetails,
    planets: &[PlanetPosition],
) -> Result<Vec<DashaPeriod>, EngineError> {
    let moon = moon_longitude(planets)?;
    let birth_jd = birth.julian_day()?;
    debug!(subject = %birth.name, birth_jd, moon, "computing vimshottari mahadashas");
    Ok(vimshottari_mahadashas(birth_jd, moon))
}

/// The nine sub-periods of any period, at any level above pranadasha.
///
/// The children's `parent_idx` is the parent's position in its complete
/// level, matching [`vimshottari_hierarchy`].
pub fn compute_antardashas(parent: &DashaPeriod) -> Result<Vec<DashaPeriod>, EngineError> {
    if !(parent.start_jd.is_finite() && parent.end_jd.is_finite())
        || parent.end_jd <= parent.start_jd
    {
        return Err(EngineError::InvalidInput(format!(
            "period [{}, {}) is empty or non-finite",
            parent.start_jd, parent.end_jd
        )));
    }
    Ok(vimshottari_children(parent, level_index(parent))?)
}

/// Every level from mahadasha down to `depth` levels (1 = mahadashas only).
pub fn vimshottari_hierarchy(
    birth: &BirthDetails,
    planets: &[PlanetPosition],
    depth: u8,
) -> Result<DashaHierarchy, EngineError> {
    let deepest = check_depth(depth)?;
    let moon = moon_longitude(planets)?;
    let birth_jd = birth.julian_day()?;
    debug!(subject = %birth.name, depth, "computing vimshottari hierarchy");
    Ok(hierarchy_to_level(birth_jd, moon, deepest.depth())?)
}

/// Chain of periods containing `at`, outermost first, down to `depth` levels.
///
/// `periods` is a contiguous sibling list (normally the mahadashas). An
/// instant outside them gives an empty chain.
pub fn active_dashas(
    periods: &[DashaPeriod],
    at: DateTime<Utc>,
    depth: u8,
) -> Result<Vec<DashaPeriod>, EngineError> {
    let deepest = check_depth(depth)?;
    Ok(active_chain(periods, datetime_to_jd(&at), deepest.depth())?)
}
