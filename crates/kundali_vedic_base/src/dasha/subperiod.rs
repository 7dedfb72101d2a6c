//! Sub-period (antardasha) generation.
//!
//! Two patterns:
//! - Proportional: child duration = (child_full_period / total_period) * parent_duration
//! - Equal: child duration = parent_duration / num_children

use super::types::{DashaEntity, DashaPeriod};

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Proportional children of `parent`.
///
/// `sequence` holds the child entities in order with their full-cycle
/// periods (days); `total_period_days` is their sum.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(DashaEntity, f64)],
    total_period_days: f64,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &(entity, full_period)) in sequence.iter().enumerate() {
        let end = cursor + (full_period / total_period_days) * parent_duration;
        children.push(DashaPeriod {
            entity,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (order_0 as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Equal-duration children of `parent`, one per entity in `sequence`.
pub fn equal_children(
    parent: &DashaPeriod,
    sequence: &[DashaEntity],
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    if sequence.is_empty() {
        return Vec::new();
    }
    let child_duration = parent.duration_days() / sequence.len() as f64;
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &entity) in sequence.iter().enumerate() {
        let end = cursor + child_duration;
        children.push(DashaPeriod {
            entity,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (order_0 as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}
