//! Ashtakavarga: benefic points contributed to each sign.
//!
//! Each of the seven classical grahas gets a Bhinnashtakavarga (BAV): eight
//! contributors (the seven grahas and the lagna) each mark the signs at
//! fixed offsets from themselves. The Sarvashtakavarga (SAV) is the per-sign
//! sum of the seven BAVs. Per-graha totals are fixed by the rule tables, so
//! every chart has BAV totals 48, 49, 39, 54, 56, 52, 39 and an SAV of 337.

use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::lordship::GrahaPlacements;
use crate::rashi::{ALL_RASHIS, Rashi};

/// Signs counted from a contributor, 1 = its own sign.
type Offsets = &'static [u8];

/// `BENEFIC_OFFSETS[target][contributor]`, both in `SAPTA_GRAHAS` order with
/// the lagna as contributor 7.
const BENEFIC_OFFSETS: [[Offsets; 8]; 7] = [
    // Surya
    [
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 6, 10, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 5, 6, 9, 10, 11, 12],
        &[5, 6, 9, 11],
        &[6, 7, 12],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 4, 6, 10, 11, 12],
    ],
    // Chandra
    [
        &[3, 6, 7, 8, 10, 11],
        &[1, 3, 6, 7, 10, 11],
        &[2, 3, 5, 6, 9, 10, 11],
        &[1, 3, 4, 5, 7, 8, 10, 11],
        &[1, 4, 7, 8, 10, 11, 12],
        &[3, 4, 5, 7, 9, 10, 11],
        &[3, 5, 6, 11],
        &[3, 6, 10, 11],
    ],
    // Mangal
    [
        &[3, 5, 6, 10, 11],
        &[3, 6, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 5, 6, 11],
        &[6, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 4, 7, 8, 9, 10, 11],
        &[1, 3, 6, 10, 11],
    ],
    // Buddh
    [
        &[5, 6, 9, 11, 12],
        &[2, 4, 6, 8, 10, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 3, 5, 6, 9, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 2, 4, 6, 8, 10, 11],
    ],
    // Guru
    [
        &[1, 2, 3, 4, 7, 8, 9, 10, 11],
        &[2, 5, 7, 9, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[1, 2, 4, 5, 6, 9, 10, 11],
        &[1, 2, 3, 4, 7, 8, 10, 11],
        &[2, 5, 6, 9, 10, 11],
        &[3, 5, 6, 12],
        &[1, 2, 4, 5, 6, 7, 9, 10, 11],
    ],
    // Shukra
    [
        &[8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11, 12],
        &[3, 4, 6, 9, 11, 12],
        &[3, 5, 6, 9, 11],
        &[5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 10, 11],
        &[3, 4, 5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 11],
    ],
    // Shani
    [
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 6, 11],
        &[3, 5, 6, 10, 11, 12],
        &[6, 8, 9, 10, 11, 12],
        &[5, 6, 11, 12],
        &[6, 11, 12],
        &[3, 5, 6, 11],
        &[1, 3, 4, 6, 10, 11],
    ],
];

/// BAV total of each classical graha, `SAPTA_GRAHAS` order.
pub const BAV_TOTALS: [u8; 7] = [48, 49, 39, 54, 56, 52, 39];

/// SAV total of every chart.
pub const SAV_TOTAL: u16 = 337;

/// Signs sharing an element, reduced together by trikona sodhana.
const TRIKONAS: [[Rashi; 3]; 4] = [
    [Rashi::Mesha, Rashi::Simha, Rashi::Dhanu],
    [Rashi::Vrishabha, Rashi::Kanya, Rashi::Makara],
    [Rashi::Mithuna, Rashi::Tula, Rashi::Kumbha],
    [Rashi::Karka, Rashi::Vrischika, Rashi::Meena],
];

/// Same-lord sign pairs that trikona sodhana leaves in separate groups.
///
/// Mangal, Shukra and Shani pairs fall in different trikonas and are
/// already reduced; Buddh and Guru pairs are not.
const EKADHIPATYA_PAIRS: [[Rashi; 2]; 2] = [
    [Rashi::Mithuna, Rashi::Kanya],
    [Rashi::Dhanu, Rashi::Meena],
];

/// Points per sign, indexed by `Rashi::index()`.
pub type SignPoints = [u8; 12];

/// Bhinnashtakavarga of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bhinnashtakavarga {
    pub graha: Graha,
    /// 0..=8 per sign.
    pub points: SignPoints,
}

impl Bhinnashtakavarga {
    pub fn total(&self) -> u8 {
        self.points.iter().sum()
    }

    pub const fn in_rashi(&self, rashi: Rashi) -> u8 {
        self.points[rashi.index() as usize]
    }
}

/// Sarvashtakavarga with both reductions applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sarvashtakavarga {
    pub points: SignPoints,
    pub after_trikona: SignPoints,
    pub after_ekadhipatya: SignPoints,
}

impl Sarvashtakavarga {
    pub fn total(&self) -> u16 {
        self.points.iter().map(|&p| p as u16).sum()
    }
}

/// All seven BAVs plus the SAV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ashtakavarga {
    /// `SAPTA_GRAHAS` order.
    pub bhinna: [Bhinnashtakavarga; 7],
    pub sarva: Sarvashtakavarga,
}

fn sapta_index(graha: Graha) -> Option<usize> {
    SAPTA_GRAHAS.iter().position(|&g| g == graha)
}

fn bav_at(target: usize, placements: &GrahaPlacements, lagna: Rashi) -> Bhinnashtakavarga {
    let mut points = [0u8; 12];
    for (contributor, offsets) in BENEFIC_OFFSETS[target].iter().enumerate() {
        let from = match SAPTA_GRAHAS.get(contributor) {
            Some(&g) => placements.rashi_of(g),
            None => lagna,
        };
        for &offset in offsets.iter() {
            points[from.forward(offset - 1).index() as usize] += 1;
        }
    }
    Bhinnashtakavarga {
        graha: SAPTA_GRAHAS[target],
        points,
    }
}

/// BAV of one classical graha. `None` for Rahu and Ketu, which have none.
pub fn bhinnashtakavarga(
    target: Graha,
    placements: &GrahaPlacements,
    lagna: Rashi,
) -> Option<Bhinnashtakavarga> {
    sapta_index(target).map(|i| bav_at(i, placements, lagna))
}

/// Subtract the smallest value of each element triangle from its members.
pub fn trikona_sodhana(points: &SignPoints) -> SignPoints {
    let mut out = *points;
    for group in &TRIKONAS {
        let min = group
            .iter()
            .map(|r| out[r.index() as usize])
            .min()
            .unwrap_or(0);
        for r in group {
            out[r.index() as usize] -= min;
        }
    }
    out
}

/// Subtract the smaller value of each Buddh / Guru sign pair from both.
pub fn ekadhipatya_sodhana(after_trikona: &SignPoints) -> SignPoints {
    let mut out = *after_trikona;
    for [a, b] in EKADHIPATYA_PAIRS {
        let (a, b) = (a.index() as usize, b.index() as usize);
        let min = out[a].min(out[b]);
        out[a] -= min;
        out[b] -= min;
    }
    out
}

/// Sum the seven BAVs sign by sign and apply both sodhanas.
pub fn sarvashtakavarga(bhinna: &[Bhinnashtakavarga; 7]) -> Sarvashtakavarga {
    let mut points = [0u8; 12];
    for bav in bhinna {
        for r in ALL_RASHIS {
            points[r.index() as usize] += bav.in_rashi(r);
        }
    }
    let after_trikona = trikona_sodhana(&points);
    let after_ekadhipatya = ekadhipatya_sodhana(&after_trikona);
    Sarvashtakavarga {
        points,
        after_trikona,
        after_ekadhipatya,
    }
}

/// Full ashtakavarga of a chart.
pub fn ashtakavarga(placements: &GrahaPlacements, lagna: Rashi) -> Ashtakavarga {
    let bhinna = std::array::from_fn(|i| bav_at(i, placements, lagna));
    let sarva = sarvashtakavarga(&bhinna);
    Ashtakavarga { bhinna, sarva }
}
