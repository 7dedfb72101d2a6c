//! Chara (Jaimini) dasha: sign-based, variable periods.
//!
//! Each sign rules for as many years as signs are counted from it to the
//! sign holding its lord: forward for the forward group, backward for the
//! rest. A lord in its own sign gives 12 years. The sequence starts at
//! the lagna and runs through all 12 signs in the lagna's direction.
//!
//! Direction is fixed per sign by the footedness of its 9th house, which
//! agrees with odd/even parity except for Mithuna, Kanya, Dhanu and Meena.
//! Vrischika and Kumbha use [`effective_lord`] to settle their co-lords.

use tracing::trace;

use super::chain::chain_cycles;
use super::query::snapshot_at;
use super::subperiod::equal_children;
use super::types::{DAYS_PER_YEAR, DashaEntity, DashaPeriod, DashaSnapshot, DashaSystem};
use crate::lordship::{GrahaPlacements, effective_lord};
use crate::rashi::{ALL_RASHIS, Rashi};

/// Counting direction per sign (index 0 = Mesha): `true` counts forward.
pub const CHARA_FORWARD: [bool; 12] = [
    true,  // Mesha
    false, // Vrishabha
    false, // Mithuna
    false, // Karka
    true,  // Simha
    true,  // Kanya
    true,  // Tula
    false, // Vrischika
    false, // Dhanu
    false, // Makara
    true,  // Kumbha
    true,  // Meena
];

/// Whether `rashi` belongs to the forward-counting group.
pub const fn is_forward(rashi: Rashi) -> bool {
    CHARA_FORWARD[rashi.index() as usize]
}

/// Chara period of `rashi` in years, 1-12.
pub fn chara_period_years(rashi: Rashi, placements: &GrahaPlacements) -> u8 {
    let lord_rashi = placements.rashi_of(effective_lord(rashi, placements));
    let distance = if is_forward(rashi) {
        rashi.distance_forward(lord_rashi)
    } else {
        rashi.distance_backward(lord_rashi)
    };
    if distance == 0 { 12 } else { distance }
}

/// The 12 dasha signs in order, starting from the lagna.
pub fn chara_sequence(lagna: Rashi) -> [Rashi; 12] {
    let forward = is_forward(lagna);
    let mut seq = ALL_RASHIS;
    for (i, slot) in seq.iter_mut().enumerate() {
        *slot = if forward {
            lagna.forward(i as u8)
        } else {
            lagna.backward(i as u8)
        };
    }
    seq
}

/// Generate Chara mahadashas from birth until `horizon_jd` is covered
/// (at least one full pass through the 12 signs).
pub fn chara_level0(
    birth_jd: f64,
    lagna: Rashi,
    placements: &GrahaPlacements,
    horizon_jd: f64,
) -> Vec<DashaPeriod> {
    let cycle: Vec<(DashaEntity, f64)> = chara_sequence(lagna)
        .into_iter()
        .map(|r| {
            let years = chara_period_years(r, placements);
            (DashaEntity::Rashi(r), years as f64 * DAYS_PER_YEAR)
        })
        .collect();

    trace!(
        lagna = lagna.western_name(),
        forward = is_forward(lagna),
        cycle_years = cycle.iter().map(|(_, d)| d).sum::<f64>() / DAYS_PER_YEAR,
        "chara seed"
    );

    chain_cycles(birth_jd, &cycle, horizon_jd)
}

/// Antardashas: 12 equal parts, starting from the sign after the parent
/// in the parent's own direction.
pub fn chara_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let DashaEntity::Rashi(r) = parent.entity else {
        return Vec::new();
    };
    let seq = chara_sequence(r);
    let entities: Vec<DashaEntity> = (1..=12)
        .map(|i| DashaEntity::Rashi(seq[i % 12]))
        .collect();
    equal_children(parent, &entities, parent_idx)
}

/// Active Chara periods at `query_jd`, down to `max_level`.
pub fn chara_snapshot(
    birth_jd: f64,
    lagna: Rashi,
    placements: &GrahaPlacements,
    horizon_jd: f64,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let level0 = chara_level0(birth_jd, lagna, placements, horizon_jd);
    snapshot_at(
        DashaSystem::Chara,
        &level0,
        query_jd,
        max_level,
        chara_children,
    )
}
