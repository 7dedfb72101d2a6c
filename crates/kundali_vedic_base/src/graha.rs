//! Vedic planet (graha) enum and rashi lordship.
//!
//! Seven visible bodies plus the two lunar nodes. Rahu is the ascending
//! node; Ketu is never observed independently and is always derived as
//! Rahu + 180 deg.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
///
/// Serialized by English name; Sanskrit names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Sun", alias = "Surya")]
    Surya,
    #[serde(rename = "Moon", alias = "Chandra")]
    Chandra,
    #[serde(rename = "Mars", alias = "Mangal")]
    Mangal,
    #[serde(rename = "Mercury", alias = "Buddh")]
    Buddh,
    #[serde(rename = "Jupiter", alias = "Guru")]
    Guru,
    #[serde(rename = "Venus", alias = "Shukra")]
    Shukra,
    #[serde(rename = "Saturn", alias = "Shani")]
    Shani,
    #[serde(rename = "Rahu")]
    Rahu,
    #[serde(rename = "Ketu")]
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Parse an English or Sanskrit name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Graha> {
        ALL_GRAHAS.into_iter().find(|g| {
            g.english_name().eq_ignore_ascii_case(name) || g.name().eq_ignore_ascii_case(name)
        })
    }
}

/// Primary planetary lord of a rashi.
///
/// Vrischika and Kumbha also have a node co-lord (Ketu, Rahu); see
/// [`crate::lordship`] for how the two are resolved for a given chart.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}
