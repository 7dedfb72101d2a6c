//! Vimshottari dasha engine (9 grahas, 120-year cycle).

use tracing::trace;

use super::balance::nakshatra_birth_balance;
use super::chain::chain_cycles;
use super::query::snapshot_at;
use super::subperiod::proportional_children;
use super::types::{DAYS_PER_YEAR, DashaEntity, DashaPeriod, DashaSnapshot, DashaSystem};
use super::vimshottari_data::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, nakshatra_lord_position,
    vimshottari_position, vimshottari_sequence_from,
};

/// Generate Vimshottari mahadashas from the back-dated first period until
/// `horizon_jd` is covered (at least one full 120-year cycle).
pub fn vimshottari_level0(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    horizon_jd: f64,
) -> Vec<DashaPeriod> {
    let nak_idx = crate::nakshatra::nakshatra_from_longitude(moon_sidereal_lon).nakshatra_index;
    let start = nakshatra_lord_position(nak_idx);
    let entry_days = VIMSHOTTARI_YEARS[start] as f64 * DAYS_PER_YEAR;
    let balance = nakshatra_birth_balance(moon_sidereal_lon, entry_days);

    trace!(
        nakshatra = nak_idx + 1,
        first = VIMSHOTTARI_GRAHAS[start].english_name(),
        remaining_years = balance.remaining_days(entry_days) / DAYS_PER_YEAR,
        "vimshottari seed"
    );

    chain_cycles(
        balance.first_period_start(birth_jd),
        &vimshottari_sequence_from(start),
        horizon_jd,
    )
}

/// Antardashas of one mahadasha, proportional, starting from its own lord.
pub fn vimshottari_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let DashaEntity::Graha(g) = parent.entity else {
        return Vec::new();
    };
    proportional_children(
        parent,
        &vimshottari_sequence_from(vimshottari_position(g)),
        VIMSHOTTARI_TOTAL_YEARS as f64 * DAYS_PER_YEAR,
        parent_idx,
    )
}

/// Active Vimshottari periods at `query_jd`, down to `max_level`
/// (4 = pranadasha).
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    horizon_jd: f64,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let level0 = vimshottari_level0(birth_jd, moon_sidereal_lon, horizon_jd);
    snapshot_at(
        DashaSystem::Vimshottari,
        &level0,
        query_jd,
        max_level,
        vimshottari_children,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn moon_at_zero_full_ketu() {
        let p = vimshottari_level0(BIRTH, 0.0, BIRTH);
        assert_eq!(p.len(), 9);
        assert_eq!(p[0].entity, DashaEntity::Graha(Graha::Ketu));
        assert!((p[0].start_jd - BIRTH).abs() < 1e-10);
        assert!((p[0].duration_years() - 7.0).abs() < 1e-10);
        assert_eq!(p[1].entity, DashaEntity::Graha(Graha::Shukra));
    }

    #[test]
    fn rohini_start_is_chandra() {
        let p = vimshottari_level0(BIRTH, 40.0 + 1e-9, BIRTH);
        assert_eq!(p[0].entity, DashaEntity::Graha(Graha::Chandra));
    }

    #[test]
    fn remaining_balance_matches_nakshatra_progress() {
        // 3/4 through Bharani (Shukra, 20y): 5 years remain after birth
        let moon = crate::nakshatra::NAKSHATRA_SPAN_27 * 1.75;
        let p = vimshottari_level0(BIRTH, moon, BIRTH);
        assert_eq!(p[0].entity, DashaEntity::Graha(Graha::Shukra));
        assert!(((p[0].end_jd - BIRTH) / DAYS_PER_YEAR - 5.0).abs() < 1e-6);
    }

    #[test]
    fn antardasha_sequence() {
        let p = vimshottari_level0(BIRTH, 0.0, BIRTH);
        let kids = vimshottari_children(&p[1], 1);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].entity, DashaEntity::Graha(Graha::Shukra));
        assert_eq!(kids[1].entity, DashaEntity::Graha(Graha::Surya));
        // Shukra/Shukra = 20 * 20 / 120 years
        assert!((kids[0].duration_years() - 20.0 * 20.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn snapshot_finds_both_levels() {
        let snap = vimshottari_snapshot(BIRTH, 0.0, BIRTH, BIRTH + 10.0 * DAYS_PER_YEAR, 1);
        let maha = snap.mahadasha().map(|m| m.entity);
        assert_eq!(maha, Some(DashaEntity::Graha(Graha::Shukra)));
        // 3 years into Shukra: Shukra/Shukra is 3.333y
        let antar = snap.antardasha().map(|a| a.entity);
        assert_eq!(antar, Some(DashaEntity::Graha(Graha::Shukra)));
    }

    #[test]
    fn snapshot_reaches_pranadasha() {
        use crate::dasha::types::{DashaLevel, MAX_DASHA_LEVEL};

        let query = BIRTH + 10.0 * DAYS_PER_YEAR;
        let snap = vimshottari_snapshot(BIRTH, 0.0, BIRTH, query, MAX_DASHA_LEVEL);
        assert_eq!(snap.periods.len(), 5);
        for (depth, p) in snap.periods.iter().enumerate() {
            assert_eq!(DashaLevel::from_u8(depth as u8), Some(p.level));
            assert!(p.contains(query));
        }
        for w in snap.periods.windows(2) {
            assert!(w[0].start_jd <= w[1].start_jd && w[1].end_jd <= w[0].end_jd);
        }
        // Shukra/Shukra runs 3.333y; 3y in, Buddh's pratyantar (2.667y..3.139y)
        let pd = snap.at_level(DashaLevel::Pratyantardasha).map(|p| p.entity);
        assert_eq!(pd, Some(DashaEntity::Graha(Graha::Buddh)));
        let sookshma = snap.at_level(DashaLevel::Sookshmadasha).unwrap();
        let prana = snap.at_level(DashaLevel::Pranadasha).unwrap();
        assert!(prana.duration_days() < sookshma.duration_days());
        assert!(sookshma.duration_days() < 30.0);
    }
}
