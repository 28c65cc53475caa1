//! Proportional sub-period generation.
//!
//! child duration = (child weight / total weight) × parent duration, with
//! the children running contiguously from the parent's start.

use crate::graha::Graha;

use super::types::{DashaLevel, DashaPeriod};

/// Force the last child to end exactly at the parent's end.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate proportional children for a parent period.
///
/// `sequence`: ordered grahas with their weights. `total_weight` is the sum
/// of the full cycle's weights. No child may extend past the parent.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_weight: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &(lord, weight)) in sequence.iter().enumerate() {
        let duration = weight / total_weight * parent_duration;
        let end = (cursor + duration).min(parent.end_jd);
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: order_0 as u16 + 1,
            parent_idx: Some(parent_idx),
            parent_lord: Some(parent.lord),
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}
