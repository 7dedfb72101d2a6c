//! Effective sign lordship for a specific chart.
//!
//! Ten signs have a single ruler. Vrischika (Mangal / Ketu) and Kumbha
//! (Shani / Rahu) carry a second, node co-lord; which of the pair governs a
//! chart is settled here, once, so every consumer agrees.

use crate::graha::{ALL_GRAHAS, Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};

/// Which sign each of the 9 grahas occupies in one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrahaPlacements {
    rashis: [Rashi; 9],
}

impl GrahaPlacements {
    /// Build from sidereal longitudes indexed by `Graha::index()`.
    pub fn from_longitudes(graha_sidereal_lons: [f64; 9]) -> Self {
        Self {
            rashis: graha_sidereal_lons.map(|lon| rashi_from_longitude(lon).rashi),
        }
    }

    /// Build from signs indexed by `Graha::index()`.
    pub const fn from_rashis(rashis: [Rashi; 9]) -> Self {
        Self { rashis }
    }

    /// Sign occupied by a graha.
    pub const fn rashi_of(&self, graha: Graha) -> Rashi {
        self.rashis[graha.index() as usize]
    }

    /// Number of grahas (of the 9) placed in `rashi`.
    pub fn occupants(&self, rashi: Rashi) -> u8 {
        ALL_GRAHAS
            .iter()
            .filter(|&&g| self.rashi_of(g) == rashi)
            .count() as u8
    }
}

/// A sign with two candidate rulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualLordship {
    pub rashi: Rashi,
    /// The classical (non-node) ruler; wins ties.
    pub primary: Graha,
    /// The node co-lord.
    pub secondary: Graha,
}

/// The two dual-ruled signs.
pub const DUAL_LORDSHIPS: [DualLordship; 2] = [
    DualLordship {
        rashi: Rashi::Vrischika,
        primary: Graha::Mangal,
        secondary: Graha::Ketu,
    },
    DualLordship {
        rashi: Rashi::Kumbha,
        primary: Graha::Shani,
        secondary: Graha::Rahu,
    },
];

impl DualLordship {
    /// Dual lordship entry for `rashi`, if it has one.
    pub fn of(rashi: Rashi) -> Option<DualLordship> {
        DUAL_LORDSHIPS.into_iter().find(|d| d.rashi == rashi)
    }

    /// Pick the governing ruler for this chart.
    ///
    /// The candidate whose current sign holds strictly more of the 9 grahas
    /// wins; an exact tie goes to the primary ruler.
    pub fn resolve(&self, placements: &GrahaPlacements) -> Graha {
        let primary_company = placements.occupants(placements.rashi_of(self.primary));
        let secondary_company = placements.occupants(placements.rashi_of(self.secondary));
        if secondary_company > primary_company {
            self.secondary
        } else {
            self.primary
        }
    }
}

/// Ruler of `rashi` for this chart, with dual lordship resolved.
pub fn effective_lord(rashi: Rashi, placements: &GrahaPlacements) -> Graha {
    match DualLordship::of(rashi) {
        Some(dual) => dual.resolve(placements),
        None => rashi_lord(rashi),
    }
}
