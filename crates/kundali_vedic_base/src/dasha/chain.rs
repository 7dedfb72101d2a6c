//! Open-ended chaining of a repeating period cycle.

use tracing::warn;

use super::types::{DAYS_PER_YEAR, DashaEntity, DashaLevel, DashaPeriod, MAX_PERIODS_PER_LEVEL};
use crate::error::VedicError;

/// JD at which generation may stop, `years` dasha years after birth.
///
/// Rejects non-finite inputs and non-positive spans.
pub fn horizon_jd(birth_jd: f64, years: f64) -> Result<f64, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth JD must be finite"));
    }
    if !years.is_finite() || years <= 0.0 {
        return Err(VedicError::InvalidInput(
            "dasha horizon must be a positive number of years",
        ));
    }
    Ok(birth_jd + years * DAYS_PER_YEAR)
}

/// Lay `cycle` end to end from `first_start_jd`, repeating it until the
/// last period ends at or after `horizon_jd`.
///
/// At least one full cycle is always produced. Each period starts at the
/// exact `end_jd` of its predecessor.
pub fn chain_cycles(
    first_start_jd: f64,
    cycle: &[(DashaEntity, f64)],
    horizon_jd: f64,
) -> Vec<DashaPeriod> {
    let n = cycle.len();
    if n == 0 {
        return Vec::new();
    }

    let mut periods = Vec::with_capacity(n * 2);
    let mut cursor = first_start_jd;
    for k in 0..MAX_PERIODS_PER_LEVEL {
        let (entity, days) = cycle[k % n];
        let end = cursor + days;
        periods.push(DashaPeriod {
            entity,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: (k as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
        if k + 1 >= n && cursor >= horizon_jd {
            return periods;
        }
    }

    warn!(
        horizon_jd,
        reached_jd = cursor,
        cap = MAX_PERIODS_PER_LEVEL,
        "dasha period cap reached before horizon"
    );
    periods
}
