//! Lookup of the period containing an instant.

use super::types::DashaPeriod;

/// Index of the period whose `[start, end)` contains `jd`.
///
/// Periods are sorted and contiguous, so a binary search on start suffices.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.start_jd <= jd);
    let candidate = idx.checked_sub(1)?;
    periods[candidate].contains(jd).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::DashaLevel;
    use crate::graha::Graha;

    fn periods() -> Vec<DashaPeriod> {
        [(0.0, 10.0), (10.0, 25.0), (25.0, 30.0)]
            .iter()
            .enumerate()
            .map(|(i, &(s, e))| DashaPeriod {
                lord: Graha::Surya,
                start_jd: s,
                end_jd: e,
                level: DashaLevel::Mahadasha,
                order: i as u16 + 1,
                parent_idx: None,
                parent_lord: None,
            })
            .collect()
    }

    #[test]
    fn boundary_belongs_to_later_period() {
        assert_eq!(find_active_period(&periods(), 10.0), Some(1));
        assert_eq!(find_active_period(&periods(), 0.0), Some(0));
    }

    #[test]
    fn outside_range() {
        assert_eq!(find_active_period(&periods(), -1.0), None);
        assert_eq!(find_active_period(&periods(), 30.0), None);
    }

    #[test]
    fn interior() {
        assert_eq!(find_active_period(&periods(), 27.5), Some(2));
    }
}
