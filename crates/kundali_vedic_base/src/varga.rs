//! Varga (harmonic divisional chart) placement.
//!
//! A varga of harmonic N cuts each 30-degree sign into N equal divisions
//! and maps every division to a target sign. The rule that picks the target
//! sign depends on the harmonic and, for most harmonics, on the parity,
//! element or modality of the natal sign. Those rules live in one table
//! ([`Varga::rule`]) so they can be audited against the classical sources
//! side by side.
//!
//! Trimshamsha (D30) is the exception: its five divisions are unequal.

use std::fmt;

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};

// ---------------------------------------------------------------------------
// Varga enum
// ---------------------------------------------------------------------------

/// The 16 Shodashavarga harmonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All supported vargas in ascending harmonic order.
pub const SHODASHAVARGA: [Varga; 16] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

impl Varga {
    /// Harmonic number N (divisions per sign).
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Sanskrit chart name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Saptavimshamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// Look up by harmonic number.
    pub fn from_divisions(n: u16) -> Option<Varga> {
        SHODASHAVARGA.into_iter().find(|v| v.divisions() == n)
    }

    /// Parse a harmonic given as `9`, `D9` or `d9`.
    pub fn parse(s: &str) -> Result<Varga, VedicError> {
        let digits = s.trim().trim_start_matches(['D', 'd']);
        let n: u16 = digits
            .parse()
            .map_err(|_| VedicError::InvalidInput("varga must be a harmonic number"))?;
        Varga::try_from(n)
    }

    /// Target-sign rule for this harmonic.
    const fn rule(self) -> VargaRule {
        match self {
            Self::D1 => VargaRule::Identity,
            Self::D2 => VargaRule::Hora,
            Self::D3 => VargaRule::Offsets(&[0, 4, 8]),
            Self::D7 => VargaRule::ParityRelative { odd: 0, even: 6 },
            Self::D9 => VargaRule::ByElement([0, 9, 6, 3]),
            Self::D10 => VargaRule::ParityRelative { odd: 0, even: 8 },
            Self::D12 => VargaRule::FromNatal,
            Self::D16 => VargaRule::BySignType([0, 4, 8]),
            Self::D20 => VargaRule::BySignType([0, 8, 4]),
            Self::D24 => VargaRule::ParityFixed { odd: 4, even: 3 },
            Self::D27 => VargaRule::ByElement([0, 3, 6, 9]),
            Self::D30 => VargaRule::Trimshamsha,
            Self::D4 | Self::D40 | Self::D45 | Self::D60 => VargaRule::Cyclic,
        }
    }
}

impl TryFrom<u16> for Varga {
    type Error = VedicError;

    fn try_from(n: u16) -> Result<Self, Self::Error> {
        Varga::from_divisions(n).ok_or(VedicError::UnsupportedHarmonic(n))
    }
}

impl fmt::Display for Varga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.divisions())
    }
}

// ---------------------------------------------------------------------------
// Rule table (internal)
// ---------------------------------------------------------------------------

/// How a division index is turned into a target sign. Sign values are
/// 0-based indices; "relative" values are added to the natal sign.
#[derive(Debug, Clone, Copy)]
enum VargaRule {
    Identity,
    /// Odd signs: Simha then Karka. Even signs: Karka then Simha.
    Hora,
    /// Natal sign + a per-division offset.
    Offsets(&'static [u8]),
    /// Start at the natal sign, advance per division.
    FromNatal,
    /// Start at natal sign + offset chosen by parity, advance per division.
    ParityRelative { odd: u8, even: u8 },
    /// Start at a fixed sign chosen by parity, advance per division.
    ParityFixed { odd: u8, even: u8 },
    /// Start at a fixed sign per element (fire, earth, air, water).
    ByElement([u8; 4]),
    /// Start at a fixed sign per modality (movable, fixed, dual).
    BySignType([u8; 3]),
    /// Unequal five-band division.
    Trimshamsha,
    /// `(natal * N + division) mod 12`.
    Cyclic,
}

const HORA_ODD: [u8; 2] = [4, 3];
const HORA_EVEN: [u8; 2] = [3, 4];

/// Trimshamsha band upper bounds (deg) and target signs. Odd signs run
/// Mesha, Kumbha, Dhanu, Mithuna, Tula; even signs mirror the band widths
/// and run Vrishabha, Kanya, Meena, Makara, Vrischika.
const TRIMSHAMSHA_ODD: [(f64, u8); 5] = [(5.0, 0), (10.0, 10), (18.0, 8), (25.0, 2), (30.0, 6)];
const TRIMSHAMSHA_EVEN: [(f64, u8); 5] = [(5.0, 1), (12.0, 5), (20.0, 11), (25.0, 9), (30.0, 7)];

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Where one longitude lands in one varga.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaPosition {
    pub varga: Varga,
    /// Target sign in the varga chart.
    pub rashi: Rashi,
    /// 0-based target sign index.
    pub rashi_index: u8,
    /// Degrees within the target sign, [0, 30).
    pub degrees_in_rashi: f64,
    /// 0-based division of the natal sign the longitude fell in.
    pub division_index: u16,
}

impl VargaPosition {
    /// Varga longitude: target sign * 30 + degrees within it.
    pub fn longitude(&self) -> f64 {
        self.rashi_index as f64 * 30.0 + self.degrees_in_rashi
    }
}

/// Scale an offset inside a division of width `width` onto 0..30 degrees.
fn scale_to_sign(offset: f64, width: f64) -> f64 {
    let deg = offset / width * 30.0;
    // rounding can land exactly on 30.0 at the top of the last division
    if deg >= 30.0 {
        30.0 - 1e-9
    } else {
        deg.max(0.0)
    }
}

/// Place a sidereal longitude in a varga chart.
pub fn varga_position(sidereal_lon: f64, varga: Varga) -> VargaPosition {
    let natal = rashi_from_longitude(sidereal_lon);
    let sign = natal.rashi_index;
    let deg = natal.degrees_in_rashi;

    if matches!(varga.rule(), VargaRule::Trimshamsha) {
        return trimshamsha_position(natal.rashi, deg);
    }

    let n = varga.divisions();
    let width = 30.0 / n as f64;
    let div = ((deg / width).floor() as u16).min(n - 1);
    let offset_in_div = deg - div as f64 * width;
    let d = (div % 12) as u8;

    let target = match varga.rule() {
        VargaRule::Identity => sign,
        VargaRule::Hora => {
            let table = if natal.rashi.is_odd() {
                HORA_ODD
            } else {
                HORA_EVEN
            };
            table[div as usize]
        }
        VargaRule::Offsets(offsets) => sign + offsets[div as usize],
        VargaRule::FromNatal => sign + d,
        VargaRule::ParityRelative { odd, even } => {
            sign + if natal.rashi.is_odd() { odd } else { even } + d
        }
        VargaRule::ParityFixed { odd, even } => {
            (if natal.rashi.is_odd() { odd } else { even }) + d
        }
        VargaRule::ByElement(starts) => starts[natal.rashi.element().index()] + d,
        VargaRule::BySignType(starts) => starts[natal.rashi.sign_type().index()] + d,
        VargaRule::Cyclic => ((sign as u32 * n as u32 + div as u32) % 12) as u8,
        VargaRule::Trimshamsha => sign,
    } % 12;

    VargaPosition {
        varga,
        rashi: ALL_RASHIS[target as usize],
        rashi_index: target,
        degrees_in_rashi: scale_to_sign(offset_in_div, width),
        division_index: div,
    }
}

fn trimshamsha_position(natal: Rashi, deg: f64) -> VargaPosition {
    let bands = if natal.is_odd() {
        &TRIMSHAMSHA_ODD
    } else {
        &TRIMSHAMSHA_EVEN
    };
    let mut lower = 0.0;
    let mut chosen = (4usize, 25.0, bands[4]);
    for (i, &(upper, target)) in bands.iter().enumerate() {
        if deg < upper {
            chosen = (i, lower, (upper, target));
            break;
        }
        lower = upper;
    }
    let (band_idx, band_lower, (band_upper, target)) = chosen;

    VargaPosition {
        varga: Varga::D30,
        rashi: ALL_RASHIS[target as usize],
        rashi_index: target,
        degrees_in_rashi: scale_to_sign(deg - band_lower, band_upper - band_lower),
        division_index: band_idx as u16,
    }
}

/// Varga house of a body: 1 when it shares the varga ascendant's sign.
pub const fn varga_house(body: Rashi, varga_ascendant: Rashi) -> u8 {
    varga_ascendant.distance_forward(body) + 1
}

// ---------------------------------------------------------------------------
// Whole chart
// ---------------------------------------------------------------------------

/// One body's placement inside a varga chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaPlacement {
    pub graha: Graha,
    pub position: VargaPosition,
    /// House counted from the varga ascendant, 1-12.
    pub house: u8,
}

/// A complete varga chart: ascendant plus every supplied body.
#[derive(Debug, Clone, PartialEq)]
pub struct VargaChart {
    pub varga: Varga,
    pub ascendant: VargaPosition,
    pub bodies: Vec<VargaPlacement>,
}

/// Build a varga chart from D1 sidereal longitudes.
///
/// The ascendant and each body pass through [`varga_position`]
/// independently; houses are then counted from the varga ascendant.
pub fn varga_chart(ascendant_lon: f64, bodies: &[(Graha, f64)], varga: Varga) -> VargaChart {
    let ascendant = varga_position(ascendant_lon, varga);
    let bodies = bodies
        .iter()
        .map(|&(graha, lon)| {
            let position = varga_position(lon, varga);
            VargaPlacement {
                graha,
                position,
                house: varga_house(position.rashi, ascendant.rashi),
            }
        })
        .collect();
    VargaChart {
        varga,
        ascendant,
        bodies,
    }
}
