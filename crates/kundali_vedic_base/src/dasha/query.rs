//! Active-period lookup.

use super::types::{DashaPeriod, DashaSnapshot, DashaSystem, MAX_DASHA_LEVEL};

/// Index of the period containing `jd` in a chained, ordered slice.
///
/// `None` when `jd` is before the first start or at/after the last end.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Active periods at `query_jd`, from the mahadasha down to `max_level`
/// (clamped to [`MAX_DASHA_LEVEL`]).
///
/// Only the chain of active periods is expanded: `children` turns one
/// period (with its index among its siblings) into the next level down.
pub fn snapshot_at<F>(
    system: DashaSystem,
    level0: &[DashaPeriod],
    query_jd: f64,
    max_level: u8,
    children: F,
) -> DashaSnapshot
where
    F: Fn(&DashaPeriod, u32) -> Vec<DashaPeriod>,
{
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let mut periods = Vec::with_capacity(max_level as usize + 1);

    if let Some(idx) = find_active_period(level0, query_jd) {
        let mut parent = level0[idx];
        let mut parent_idx = idx as u32;
        periods.push(parent);
        for _ in 0..max_level {
            let kids = children(&parent, parent_idx);
            let Some(k) = find_active_period(&kids, query_jd) else {
                break;
            };
            parent = kids[k];
            parent_idx = k as u32;
            periods.push(parent);
        }
    }

    DashaSnapshot {
        system,
        query_jd,
        periods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::{DashaEntity, DashaLevel};

    fn chain(bounds: &[f64]) -> Vec<DashaPeriod> {
        bounds
            .windows(2)
            .enumerate()
            .map(|(i, w)| DashaPeriod {
                entity: DashaEntity::Yogini(i as u8),
                start_jd: w[0],
                end_jd: w[1],
                level: DashaLevel::Mahadasha,
                order: i as u16 + 1,
                parent_idx: 0,
            })
            .collect()
    }

    #[test]
    fn finds_containing_period() {
        let p = chain(&[0.0, 10.0, 25.0, 40.0]);
        assert_eq!(find_active_period(&p, 0.0), Some(0));
        assert_eq!(find_active_period(&p, 10.0), Some(1));
        assert_eq!(find_active_period(&p, 39.9), Some(2));
    }

    #[test]
    fn outside_range_is_none() {
        let p = chain(&[0.0, 10.0, 25.0]);
        assert_eq!(find_active_period(&p, -0.1), None);
        assert_eq!(find_active_period(&p, 25.0), None);
        assert_eq!(find_active_period(&[], 5.0), None);
    }

    #[test]
    fn snapshot_without_children() {
        let p = chain(&[0.0, 10.0, 25.0]);
        let snap = snapshot_at(DashaSystem::Yogini, &p, 12.0, MAX_DASHA_LEVEL, |_, _| Vec::new());
        assert_eq!(snap.mahadasha().map(|m| m.order), Some(2));
        assert!(snap.antardasha().is_none());
    }

    #[test]
    fn snapshot_past_horizon_is_empty() {
        let p = chain(&[0.0, 10.0]);
        let snap = snapshot_at(DashaSystem::Chara, &p, 50.0, MAX_DASHA_LEVEL, |_, _| Vec::new());
        assert!(snap.periods.is_empty());
    }

    fn halving(parent: &DashaPeriod, _: u32) -> Vec<DashaPeriod> {
        let Some(level) = parent.level.child_level() else {
            return Vec::new();
        };
        let mid = (parent.start_jd + parent.end_jd) / 2.0;
        [(parent.start_jd, mid), (mid, parent.end_jd)]
            .iter()
            .enumerate()
            .map(|(i, &(s, e))| DashaPeriod {
                entity: parent.entity,
                start_jd: s,
                end_jd: e,
                level,
                order: i as u16 + 1,
                parent_idx: 0,
            })
            .collect()
    }

    #[test]
    fn snapshot_drills_to_requested_depth() {
        let p = chain(&[0.0, 32.0]);
        let snap = snapshot_at(DashaSystem::Vimshottari, &p, 5.0, 2, halving);
        assert_eq!(snap.periods.len(), 3);
        assert_eq!(snap.at_level(DashaLevel::Pratyantardasha).map(|x| x.end_jd), Some(8.0));
        assert!(snap.at_level(DashaLevel::Sookshmadasha).is_none());
    }

    #[test]
    fn snapshot_depth_is_clamped_to_prana() {
        let p = chain(&[0.0, 32.0]);
        let snap = snapshot_at(DashaSystem::Vimshottari, &p, 31.0, 200, halving);
        assert_eq!(snap.periods.len(), MAX_DASHA_LEVEL as usize + 1);
        let prana = snap.at_level(DashaLevel::Pranadasha).unwrap();
        assert_eq!(prana.level, DashaLevel::Pranadasha);
        assert_eq!((prana.start_jd, prana.end_jd), (30.0, 32.0));
        for w in snap.periods.windows(2) {
            assert!(w[0].start_jd <= w[1].start_jd && w[1].end_jd <= w[0].end_jd);
        }
    }
}
