//! Yogini dasha engine (8 yoginis, 36-year cycle).
//!
//! The Moon's birth nakshatra picks the first Yogini; its progress through
//! that nakshatra sets how much of the first period ran before birth.

use tracing::trace;

use super::balance::nakshatra_birth_balance;
use super::chain::chain_cycles;
use super::query::snapshot_at;
use super::subperiod::proportional_children;
use super::types::{DAYS_PER_YEAR, DashaEntity, DashaPeriod, DashaSnapshot, DashaSystem};
use super::yogini_data::{
    YOGINI_TOTAL_YEARS, yogini_name, yogini_period_days, yogini_sequence_from, yogini_start_index,
};

// ── Tier 0: Level-0 (Mahadasha) generation ───────────────────────────

/// Generate Yogini mahadashas from the back-dated first period until
/// `horizon_jd` is covered (at least one full 36-year cycle).
pub fn yogini_level0(birth_jd: f64, moon_sidereal_lon: f64, horizon_jd: f64) -> Vec<DashaPeriod> {
    let nak_idx = crate::nakshatra::nakshatra_from_longitude(moon_sidereal_lon).nakshatra_index;
    let start = yogini_start_index(nak_idx);
    let balance = nakshatra_birth_balance(moon_sidereal_lon, yogini_period_days(start));

    trace!(
        nakshatra = nak_idx + 1,
        first = yogini_name(start),
        elapsed_fraction = balance.elapsed_fraction,
        "yogini seed"
    );

    chain_cycles(
        balance.first_period_start(birth_jd),
        &yogini_sequence_from(start),
        horizon_jd,
    )
}

// ── Tier 1: Children of one parent ───────────────────────────────────

/// Antardashas of one Yogini mahadasha, proportional, starting from the
/// parent's own Yogini.
pub fn yogini_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let DashaEntity::Yogini(y) = parent.entity else {
        return Vec::new();
    };
    proportional_children(
        parent,
        &yogini_sequence_from(y),
        YOGINI_TOTAL_YEARS as f64 * DAYS_PER_YEAR,
        parent_idx,
    )
}

// ── Tier 2: Snapshot ─────────────────────────────────────────────────

/// Active Yogini periods at `query_jd`, down to `max_level`.
pub fn yogini_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    horizon_jd: f64,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let level0 = yogini_level0(birth_jd, moon_sidereal_lon, horizon_jd);
    snapshot_at(
        DashaSystem::Yogini,
        &level0,
        query_jd,
        max_level,
        yogini_children,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn moon_at_nakshatra_start_begins_at_birth() {
        // Ardra starts at 5 * 13.333 = 66.667 → Mangala
        let p = yogini_level0(BIRTH, 5.0 * NAKSHATRA_SPAN_27 + 1e-9, BIRTH);
        assert_eq!(p[0].entity, DashaEntity::Yogini(0));
        assert!((p[0].start_jd - BIRTH).abs() < 1e-4);
        assert!((p[0].duration_years() - 1.0).abs() < 1e-10);
        assert_eq!(p.len(), 8);
    }

    #[test]
    fn first_period_backdated_full_length() {
        // Halfway through Punarvasu → Pingala (2y), 1 year already elapsed
        let moon = 6.5 * NAKSHATRA_SPAN_27;
        let p = yogini_level0(BIRTH, moon, BIRTH);
        assert_eq!(p[0].entity, DashaEntity::Yogini(1));
        assert!((p[0].start_jd - (BIRTH - DAYS_PER_YEAR)).abs() < 1e-6);
        assert!((p[0].duration_years() - 2.0).abs() < 1e-10);
        assert!((p[0].end_jd - (BIRTH + DAYS_PER_YEAR)).abs() < 1e-6);
        assert_eq!(p[1].entity, DashaEntity::Yogini(2));
    }

    #[test]
    fn covers_horizon_with_repeated_cycles() {
        let horizon = BIRTH + 120.0 * DAYS_PER_YEAR;
        let p = yogini_level0(BIRTH, 85.0, horizon);
        assert!(p.len() > 24);
        assert!(p.last().map(|l| l.end_jd >= horizon).unwrap_or(false));
        assert_eq!(p[8].entity, p[0].entity);
        for w in p.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }

    #[test]
    fn children_start_from_parent() {
        let p = yogini_level0(BIRTH, 85.0, BIRTH);
        let kids = yogini_children(&p[0], 0);
        assert_eq!(kids.len(), 8);
        assert_eq!(kids[0].entity, p[0].entity);
        assert_eq!(kids[7].end_jd, p[0].end_jd);
    }

    #[test]
    fn snapshot_past_horizon_is_empty() {
        let snap = yogini_snapshot(BIRTH, 85.0, BIRTH, BIRTH + 200.0 * DAYS_PER_YEAR, 1);
        assert!(snap.mahadasha().is_none());
    }

    #[test]
    fn snapshot_at_birth() {
        let snap = yogini_snapshot(BIRTH, 85.0, BIRTH, BIRTH, 1);
        let maha = snap.mahadasha().copied();
        assert_eq!(maha.map(|m| m.entity), Some(DashaEntity::Yogini(1)));
        assert!(snap.antardasha().is_some());
    }
}
