//! Dasha timelines for the chart document.
//!
//! Level-0 periods come from `kundali_vedic_base::dasha`; this module turns
//! them into calendar periods and resolves the active pair at the query time.

use tracing::warn;

use kundali_time::jd_to_datetime;
use kundali_vedic_base::dasha::{
    DashaEntity, DashaPeriod, DashaSnapshot, DashaSystem, chara_children, chara_level0,
    snapshot_at, vimshottari_children, vimshottari_level0, yogini_children, yogini_graha,
    yogini_level0,
};
use kundali_vedic_base::{Graha, GrahaPlacements, Rashi, effective_lord};

use crate::document::{DashaTimeline, Dashas, PeriodEntry};
use crate::error::ChartError;

/// Inputs shared by every dasha system.
#[derive(Debug, Clone, Copy)]
pub struct DashaInputs<'a> {
    pub birth_jd: f64,
    pub horizon_jd: f64,
    pub query_jd: f64,
    pub moon_lon: f64,
    pub lagna: Rashi,
    pub placements: &'a GrahaPlacements,
    /// Depth of the running-period stack (0-4).
    pub max_level: u8,
}

/// Build all three timelines.
pub fn build_dashas(inputs: &DashaInputs<'_>) -> Result<Dashas, ChartError> {
    let lord_of = |entity: DashaEntity| -> Option<Graha> {
        match entity {
            DashaEntity::Graha(g) => Some(g),
            DashaEntity::Yogini(y) => yogini_graha(y),
            DashaEntity::Rashi(r) => Some(effective_lord(r, inputs.placements)),
        }
    };

    let vim = vimshottari_level0(inputs.birth_jd, inputs.moon_lon, inputs.horizon_jd);
    let vim_snap = snapshot_at(
        DashaSystem::Vimshottari,
        &vim,
        inputs.query_jd,
        inputs.max_level,
        vimshottari_children,
    );

    let yog = yogini_level0(inputs.birth_jd, inputs.moon_lon, inputs.horizon_jd);
    let yog_snap = snapshot_at(
        DashaSystem::Yogini,
        &yog,
        inputs.query_jd,
        inputs.max_level,
        yogini_children,
    );

    let chara = chara_level0(
        inputs.birth_jd,
        inputs.lagna,
        inputs.placements,
        inputs.horizon_jd,
    );
    let chara_snap = snapshot_at(
        DashaSystem::Chara,
        &chara,
        inputs.query_jd,
        inputs.max_level,
        chara_children,
    );

    Ok(Dashas {
        vimshottari: timeline(&vim, &vim_snap, &lord_of)?,
        yogini: timeline(&yog, &yog_snap, &lord_of)?,
        chara: timeline(&chara, &chara_snap, &lord_of)?,
    })
}

/// Convert one system's level-0 periods and snapshot.
pub fn timeline<F>(
    level0: &[DashaPeriod],
    snapshot: &DashaSnapshot,
    lord_of: &F,
) -> Result<DashaTimeline, ChartError>
where
    F: Fn(DashaEntity) -> Option<Graha>,
{
    let active = snapshot.mahadasha();
    let periods = level0
        .iter()
        .map(|p| entry(p, active == Some(p), lord_of))
        .collect::<Result<Vec<_>, _>>()?;
    let current_stack = snapshot
        .periods
        .iter()
        .map(|p| entry(p, true, lord_of))
        .collect::<Result<Vec<_>, _>>()?;
    let current = current_stack.first().cloned();
    let current_antardasha = current_stack.get(1).cloned();

    if current.is_none() {
        warn!(
            system = snapshot.system.name(),
            query_jd = snapshot.query_jd,
            "query time outside generated dasha range"
        );
    }

    Ok(DashaTimeline {
        system: snapshot.system.name(),
        query_time: jd_to_datetime(snapshot.query_jd)?,
        periods,
        current,
        current_antardasha,
        current_stack,
    })
}

fn entry<F>(period: &DashaPeriod, current: bool, lord_of: &F) -> Result<PeriodEntry, ChartError>
where
    F: Fn(DashaEntity) -> Option<Graha>,
{
    Ok(PeriodEntry {
        level: period.level.name(),
        entity: period.entity.name(),
        lord: lord_of(period.entity),
        start: jd_to_datetime(period.start_jd)?,
        end: jd_to_datetime(period.end_jd)?,
        duration_years: period.duration_years(),
        current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_vedic_base::dasha::{DAYS_PER_YEAR, MAX_DASHA_LEVEL};

    const BIRTH_JD: f64 = 2_452_056.179_166_666_7;
    const LONS: [f64; 9] = [41.3, 85.2, 270.9, 54.8, 63.1, 5.6, 38.4, 78.2, 258.2];

    fn inputs(placements: &GrahaPlacements, query_jd: f64) -> DashaInputs<'_> {
        DashaInputs {
            birth_jd: BIRTH_JD,
            horizon_jd: BIRTH_JD + 120.0 * DAYS_PER_YEAR,
            query_jd,
            moon_lon: LONS[1],
            lagna: Rashi::Dhanu,
            placements,
            max_level: MAX_DASHA_LEVEL,
        }
    }

    #[test]
    fn exactly_one_current_period_per_system() {
        let placements = GrahaPlacements::from_longitudes(LONS);
        let d = build_dashas(&inputs(&placements, BIRTH_JD + 10.0 * DAYS_PER_YEAR)).unwrap();
        for t in [&d.vimshottari, &d.yogini, &d.chara] {
            assert_eq!(t.periods.iter().filter(|p| p.current).count(), 1, "{}", t.system);
            assert!(t.current.is_some());
            assert!(t.current_antardasha.is_some());
        }
    }

    #[test]
    fn running_stack_goes_five_levels_deep() {
        let placements = GrahaPlacements::from_longitudes(LONS);
        let query = BIRTH_JD + 10.0 * DAYS_PER_YEAR;
        let d = build_dashas(&inputs(&placements, query)).unwrap();
        let stack = &d.vimshottari.current_stack;
        let levels: Vec<&str> = stack.iter().map(|p| p.level).collect();
        assert_eq!(
            levels,
            [
                "Mahadasha",
                "Antardasha",
                "Pratyantardasha",
                "Sookshmadasha",
                "Pranadasha"
            ]
        );
        for w in stack.windows(2) {
            assert!(w[0].start <= w[1].start && w[1].end <= w[0].end);
        }
        assert_eq!(d.vimshottari.current.as_ref(), stack.first());
        assert_eq!(d.vimshottari.current_antardasha.as_ref(), stack.get(1));
    }

    #[test]
    fn shallow_stack_when_requested() {
        let placements = GrahaPlacements::from_longitudes(LONS);
        let mut i = inputs(&placements, BIRTH_JD + 10.0 * DAYS_PER_YEAR);
        i.max_level = 0;
        let d = build_dashas(&i).unwrap();
        assert_eq!(d.yogini.current_stack.len(), 1);
        assert!(d.yogini.current.is_some());
        assert!(d.yogini.current_antardasha.is_none());
    }

    #[test]
    fn yogini_lords_attached() {
        let placements = GrahaPlacements::from_longitudes(LONS);
        let d = build_dashas(&inputs(&placements, BIRTH_JD)).unwrap();
        assert_eq!(d.yogini.periods[0].entity, "Pingala");
        assert_eq!(d.yogini.periods[0].lord, Some(Graha::Surya));
        assert_eq!(d.chara.periods[0].entity, "Sagittarius");
        assert_eq!(d.chara.periods[0].lord, Some(Graha::Guru));
    }

    #[test]
    fn query_past_horizon_has_no_current() {
        let placements = GrahaPlacements::from_longitudes(LONS);
        let far = BIRTH_JD + 1000.0 * DAYS_PER_YEAR;
        let d = build_dashas(&inputs(&placements, far)).unwrap();
        assert!(d.yogini.current.is_none());
        assert!(d.yogini.current_antardasha.is_none());
        assert!(d.yogini.current_stack.is_empty());
        assert!(d.yogini.periods.iter().all(|p| !p.current));
    }
}
