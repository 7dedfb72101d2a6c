//! Core types for dasha (planetary period) calculations.
//!
//! Dashas partition a life into consecutive periods, each ruled by one
//! entity from a fixed rotating set. Periods are stored as Julian Day (UT)
//! half-open intervals `[start_jd, end_jd)` and are always chained: every
//! period starts exactly where the previous one ends.

use crate::graha::Graha;
use crate::rashi::Rashi;

use super::yogini_data::yogini_name;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Hard cap on generated mahadashas, in case a horizon is unreachable.
pub const MAX_PERIODS_PER_LEVEL: usize = 1_000;

/// Deepest supported level (0 = mahadasha, 4 = pranadasha).
pub const MAX_DASHA_LEVEL: u8 = 4;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// What entity rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashaEntity {
    /// Nakshatra-based systems.
    Graha(Graha),
    /// Sign-based systems.
    Rashi(Rashi),
    /// Yogini system (0-based, 0..7 for 8 yoginis).
    Yogini(u8),
}

impl DashaEntity {
    /// Display name: graha / western sign / yogini name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Rashi(r) => r.western_name(),
            Self::Yogini(y) => yogini_name(*y),
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The entity ruling this period.
    pub entity: DashaEntity,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into parent level's array (0 for level 0).
    pub parent_idx: u32,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in dasha years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Dasha systems generated by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashaSystem {
    Vimshottari,
    Yogini,
    Chara,
}

impl DashaSystem {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Yogini => "Yogini",
            Self::Chara => "Chara",
        }
    }
}

/// Active periods at one instant, outermost level first.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaSnapshot {
    pub system: DashaSystem,
    pub query_jd: f64,
    /// `periods[k]` is the active period at level `k`, from the mahadasha
    /// down to the requested depth. Empty when `query_jd` lies outside the
    /// generated range.
    pub periods: Vec<DashaPeriod>,
}

impl DashaSnapshot {
    /// Active mahadasha, if any.
    pub fn mahadasha(&self) -> Option<&DashaPeriod> {
        self.periods.first()
    }

    /// Active antardasha, if any.
    pub fn antardasha(&self) -> Option<&DashaPeriod> {
        self.periods.get(1)
    }

    /// Active period at `level`, if the snapshot went that deep.
    pub fn at_level(&self, level: DashaLevel) -> Option<&DashaPeriod> {
        self.periods.get(level as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: f64, end: f64) -> DashaPeriod {
        DashaPeriod {
            entity: DashaEntity::Yogini(0),
            start_jd: start,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: 0,
        }
    }

    #[test]
    fn half_open_containment() {
        let p = period(10.0, 20.0);
        assert!(p.contains(10.0));
        assert!(p.contains(19.999));
        assert!(!p.contains(20.0));
        assert!(!p.contains(9.999));
    }

    #[test]
    fn durations() {
        let p = period(0.0, 2.0 * DAYS_PER_YEAR);
        assert!((p.duration_years() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn entity_names() {
        assert_eq!(DashaEntity::Graha(Graha::Shani).name(), "Saturn");
        assert_eq!(DashaEntity::Rashi(Rashi::Dhanu).name(), "Sagittarius");
        assert_eq!(DashaEntity::Yogini(1).name(), "Pingala");
    }

    #[test]
    fn level_chain_ends_at_prana() {
        let mut level = DashaLevel::Mahadasha;
        let mut depth = 0;
        while let Some(next) = level.child_level() {
            depth += 1;
            assert_eq!(DashaLevel::from_u8(depth), Some(next));
            level = next;
        }
        assert_eq!(level, DashaLevel::Pranadasha);
        assert_eq!(depth, MAX_DASHA_LEVEL);
        assert_eq!(DashaLevel::from_u8(MAX_DASHA_LEVEL + 1), None);
    }
}
