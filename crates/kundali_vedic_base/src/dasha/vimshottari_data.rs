//! Vimshottari lord sequence and year table.
//!
//! 9 grahas, 120-year cycle. The same table weights the KP sub-lord
//! division of a nakshatra.

use crate::graha::Graha;

use super::types::{DAYS_PER_YEAR, DashaEntity};

/// Vimshottari order, starting from Ashwini's lord.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha years, aligned with [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [u8; 9] = [7, 20, 6, 10, 7, 18, 16, 19, 17];

/// Full cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: u16 = 120;

/// Position of a graha in [`VIMSHOTTARI_GRAHAS`].
pub fn vimshottari_position(graha: Graha) -> usize {
    // every graha appears exactly once
    VIMSHOTTARI_GRAHAS
        .iter()
        .position(|&g| g == graha)
        .unwrap_or(0)
}

/// Position of the lord of a nakshatra (0-26) in the sequence.
pub const fn nakshatra_lord_position(nakshatra_index: u8) -> usize {
    (nakshatra_index % 27 % 9) as usize
}

/// Entity/duration pairs for one full cycle, rotated to start at `start`.
pub fn vimshottari_sequence_from(start: usize) -> Vec<(DashaEntity, f64)> {
    (0..9)
        .map(|k| {
            let i = (start + k) % 9;
            (
                DashaEntity::Graha(VIMSHOTTARI_GRAHAS[i]),
                VIMSHOTTARI_YEARS[i] as f64 * DAYS_PER_YEAR,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_sum_to_120() {
        let sum: u16 = VIMSHOTTARI_YEARS.iter().map(|&y| y as u16).sum();
        assert_eq!(sum, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn each_graha_once() {
        for g in crate::graha::ALL_GRAHAS {
            assert_eq!(VIMSHOTTARI_GRAHAS.iter().filter(|&&x| x == g).count(), 1);
        }
    }

    #[test]
    fn lord_positions_repeat_every_nine() {
        assert_eq!(nakshatra_lord_position(0), 0); // Ashwini → Ketu
        assert_eq!(nakshatra_lord_position(9), 0); // Magha → Ketu
        assert_eq!(nakshatra_lord_position(26), 8); // Revati → Buddh
        assert_eq!(VIMSHOTTARI_GRAHAS[nakshatra_lord_position(6)], Graha::Guru); // Punarvasu
    }

    #[test]
    fn rotated_sequence_wraps() {
        let seq = vimshottari_sequence_from(7);
        assert_eq!(seq[0].0, DashaEntity::Graha(Graha::Shani));
        assert_eq!(seq[2].0, DashaEntity::Graha(Graha::Ketu));
        let total: f64 = seq.iter().map(|(_, d)| d).sum();
        assert!((total - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }
}
