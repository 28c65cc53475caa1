//! Vimshottari dasha engine.
//!
//! - Mahadasha cycle from the birth balance
//! - Children of any single period (uniform proportional rule)
//! - Complete level from a parent level
//! - Full hierarchy down to a requested depth
//! - Chain of active periods without materializing whole levels

use crate::error::VedicError;

use super::balance::nakshatra_birth_balance;
use super::query::find_active_period;
use super::sequence::{VIMSHOTTARI_TOTAL_YEARS, cycle_from};
use super::subperiod::proportional_children;
use super::types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};

/// Sub-periods of every non-pranadasha period.
const CHILDREN_PER_PERIOD: u32 = 9;

/// Mahadasha periods from birth.
///
/// The first period is the birth lord's remaining balance, the next eight
/// are full, and when the Moon was not at a nakshatra's very start a tenth
/// period of the birth lord covers the elapsed part, so the list always
/// spans exactly 120 years.
pub fn vimshottari_mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = nakshatra_birth_balance(moon_sidereal_lon);
    let cycle = cycle_from(balance.lord);

    let mut periods = Vec::with_capacity(10);
    let mut cursor = birth_jd;
    let mut push = |lord, duration: f64, periods: &mut Vec<DashaPeriod>| {
        let end = cursor + duration;
        periods.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: periods.len() as u16 + 1,
            parent_idx: None,
            parent_lord: None,
        });
        cursor = end;
    };

    for (i, &(lord, years)) in cycle.iter().enumerate() {
        let duration = if i == 0 {
            balance.balance_days
        } else {
            years * DAYS_PER_YEAR
        };
        push(lord, duration, &mut periods);
    }
    if balance.elapsed_days > 0.0 {
        push(balance.lord, balance.elapsed_days, &mut periods);
    }

    // The cycle closes exactly 120 years after birth.
    if let Some(last) = periods.last_mut() {
        last.end_jd = birth_jd + VIMSHOTTARI_TOTAL_YEARS * DAYS_PER_YEAR;
    }
    periods
}

/// Position of a period in its complete level array.
///
/// Every parent has nine children, so a child of the parent at index `p`
/// with 1-based `order` sits at `9p + order - 1`.
pub fn level_index(period: &DashaPeriod) -> u32 {
    let sibling = u32::from(period.order.saturating_sub(1));
    match period.parent_idx {
        None => sibling,
        Some(parent) => parent * CHILDREN_PER_PERIOD + sibling,
    }
}

/// The nine sub-periods of one period, starting at the parent's own lord.
///
/// `parent_idx` is the parent's index in its level array.
pub fn vimshottari_children(
    parent: &DashaPeriod,
    parent_idx: u32,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let child_level = parent
        .level
        .child_level()
        .ok_or(VedicError::NoChildLevel(parent.level.name()))?;
    let sequence = cycle_from(parent.lord);
    Ok(proportional_children(
        parent,
        &sequence,
        VIMSHOTTARI_TOTAL_YEARS,
        child_level,
        parent_idx,
    ))
}

/// Complete level N from all periods at level N-1.
pub fn vimshottari_complete_level(
    parent_level: &[DashaPeriod],
) -> Result<Vec<DashaPeriod>, VedicError> {
    let estimated = parent_level.len() * 9;
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(VedicError::InvalidInput(format!(
            "dasha level of {estimated} periods exceeds {MAX_PERIODS_PER_LEVEL}"
        )));
    }
    let mut result = Vec::with_capacity(estimated);
    for (pidx, parent) in parent_level.iter().enumerate() {
        result.extend(vimshottari_children(parent, pidx as u32)?);
    }
    Ok(result)
}

/// All levels from mahadasha down to `max_level` (clamped to the deepest level).
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let mut levels = vec![vimshottari_mahadashas(birth_jd, moon_sidereal_lon)];
    for depth in 1..=max_level as usize {
        let next = vimshottari_complete_level(&levels[depth - 1])?;
        levels.push(next);
    }
    Ok(DashaHierarchy { birth_jd, levels })
}

/// Active periods at `query_jd`, one per level down to `max_level`,
/// starting from a contiguous top-level list.
///
/// Only the chain of active periods is expanded. The chain is empty when
/// `query_jd` falls outside `top`.
pub fn active_chain(
    top: &[DashaPeriod],
    query_jd: f64,
    max_level: u8,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let mut chain = Vec::new();
    let Some(idx) = find_active_period(top, query_jd) else {
        return Ok(chain);
    };
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let mut current = top[idx];
    chain.push(current);

    while current.level.depth() < max_level {
        let children = vimshottari_children(&current, level_index(&current))?;
        let Some(child_idx) = find_active_period(&children, query_jd) else {
            break;
        };
        current = children[child_idx];
        chain.push(current);
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use crate::nakshatra::NAKSHATRA_SPAN;
    use approx::assert_abs_diff_eq;

    const BIRTH: f64 = 2_447_906.708_333;

    #[test]
    fn ashwini_start_gives_full_cycle_of_nine() {
        let periods = vimshottari_mahadashas(BIRTH, 0.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].lord, Graha::Ketu);
        assert_abs_diff_eq!(periods[0].duration_years(), 7.0, epsilon = 1e-9);
        assert_eq!(periods[8].lord, Graha::Buddh);
    }

    #[test]
    fn mid_nakshatra_adds_tail_of_birth_lord() {
        let periods = vimshottari_mahadashas(BIRTH, NAKSHATRA_SPAN * 0.25);
        assert_eq!(periods.len(), 10);
        assert_eq!(periods[0].lord, Graha::Ketu);
        assert_abs_diff_eq!(periods[0].duration_years(), 5.25, epsilon = 1e-6);
        assert_eq!(periods[9].lord, Graha::Ketu);
        assert_abs_diff_eq!(periods[9].duration_years(), 1.75, epsilon = 1e-6);
    }

    #[test]
    fn cycle_spans_exactly_120_years() {
        for lon in [0.0, 3.3, 100.0, 211.7, 359.99] {
            let periods = vimshottari_mahadashas(BIRTH, lon);
            let first = periods.first().unwrap();
            let last = periods.last().unwrap();
            assert_eq!(first.start_jd, BIRTH);
            assert_eq!(last.end_jd, BIRTH + 120.0 * DAYS_PER_YEAR);
            for w in periods.windows(2) {
                assert_eq!(w[0].end_jd, w[1].start_jd);
            }
        }
    }

    #[test]
    fn antardashas_start_at_parent_lord() {
        let periods = vimshottari_mahadashas(BIRTH, 200.0);
        for (i, p) in periods.iter().enumerate() {
            let children = vimshottari_children(p, i as u32).unwrap();
            assert_eq!(children.len(), 9);
            assert_eq!(children[0].lord, p.lord);
            assert_eq!(children[0].level, DashaLevel::Antardasha);
        }
    }

    #[test]
    fn venus_antardasha_of_venus_is_40_months() {
        let venus = DashaPeriod {
            lord: Graha::Shukra,
            start_jd: BIRTH,
            end_jd: BIRTH + 20.0 * DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: None,
            parent_lord: None,
        };
        let children = vimshottari_children(&venus, 0).unwrap();
        // 20 × 20 / 120 = 3.333 years
        assert_abs_diff_eq!(
            children[0].duration_years(),
            20.0 * 20.0 / 120.0,
            epsilon = 1e-9
        );
        assert_eq!(children[1].lord, Graha::Surya);
    }

    #[test]
    fn pranadasha_has_no_children() {
        let p = DashaPeriod {
            lord: Graha::Surya,
            start_jd: 0.0,
            end_jd: 1.0,
            level: DashaLevel::Pranadasha,
            order: 1,
            parent_idx: Some(0),
            parent_lord: Some(Graha::Surya),
        };
        assert!(matches!(
            vimshottari_children(&p, 0),
            Err(VedicError::NoChildLevel(_))
        ));
    }

    #[test]
    fn hierarchy_level_sizes() {
        let h = vimshottari_hierarchy(BIRTH, 0.0, 2).unwrap();
        assert_eq!(h.levels.len(), 3);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
    }

    #[test]
    fn active_chain_matches_hierarchy() {
        let h = vimshottari_hierarchy(BIRTH, 77.7, 3).unwrap();
        let query = BIRTH + 9_876.5;
        let chain = active_chain(&h.levels[0], query, 3).unwrap();
        assert_eq!(chain.len(), 4);
        for (level, period) in chain.iter().enumerate() {
            let idx = find_active_period(&h.levels[level], query).unwrap();
            assert_eq!(*period, h.levels[level][idx]);
            assert_eq!(level_index(period), idx as u32);
        }
    }

    #[test]
    fn level_index_is_position_in_level() {
        let h = vimshottari_hierarchy(BIRTH, 123.4, 3).unwrap();
        for level in &h.levels {
            for (i, p) in level.iter().enumerate() {
                assert_eq!(level_index(p), i as u32);
            }
        }
    }

    #[test]
    fn active_chain_outside_cycle_is_empty() {
        let mahas = vimshottari_mahadashas(BIRTH, 0.0);
        assert!(active_chain(&mahas, BIRTH - 1.0, 2).unwrap().is_empty());
    }
}
