//! Yogini dasha table.
//!
//! 8 Yoginis, 36-year total cycle. Each Yogini rules for its 1-based
//! position in years (Mangala 1 .. Sankata 8).

use crate::graha::Graha;

use super::types::{DAYS_PER_YEAR, DashaEntity};

/// Yogini names (0-indexed).
pub const YOGINI_NAMES: [&str; 8] = [
    "Mangala", "Pingala", "Dhanya", "Bhramari", "Bhadrika", "Ulka", "Siddha", "Sankata",
];

/// Graha lord of each Yogini.
pub const YOGINI_GRAHAS: [Graha; 8] = [
    Graha::Chandra,
    Graha::Surya,
    Graha::Guru,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Shani,
    Graha::Shukra,
    Graha::Rahu,
];

/// Period in years of each Yogini.
pub const YOGINI_YEARS: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Full cycle length in years.
pub const YOGINI_TOTAL_YEARS: u8 = 36;

/// Starting Yogini (0-7) for a birth nakshatra (0-26).
///
/// With the 1-based nakshatra number, `(number + 3) % 8` is the 1-based
/// Yogini, where a remainder of 0 means the 8th (Sankata).
pub const fn yogini_start_index(nakshatra_index: u8) -> u8 {
    let number = nakshatra_index % 27 + 1;
    match (number + 3) % 8 {
        0 => 7,
        r => r - 1,
    }
}

/// Get the Yogini name for a 0-based index.
pub fn yogini_name(idx: u8) -> &'static str {
    YOGINI_NAMES.get(idx as usize).copied().unwrap_or("Unknown")
}

/// Get the graha lord of a Yogini.
pub fn yogini_graha(idx: u8) -> Option<Graha> {
    YOGINI_GRAHAS.get(idx as usize).copied()
}

/// Period of a Yogini in days.
pub fn yogini_period_days(idx: u8) -> f64 {
    YOGINI_YEARS[(idx % 8) as usize] as f64 * DAYS_PER_YEAR
}

/// Entity/duration pairs for one full cycle, rotated to start at `start`.
pub fn yogini_sequence_from(start: u8) -> Vec<(DashaEntity, f64)> {
    (0..8u8)
        .map(|k| {
            let y = (start + k) % 8;
            (DashaEntity::Yogini(y), yogini_period_days(y))
        })
        .collect()
}
