//! Whole-sign D1 houses: sign, lord and occupants of each bhava.

use crate::graha::{ALL_GRAHAS, Graha, rashi_lord};
use crate::lordship::GrahaPlacements;
use crate::rashi::Rashi;

/// One whole-sign house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    /// 1-based, 1 = lagna.
    pub number: u8,
    pub rashi: Rashi,
    /// Classical sign lord; node co-lords are not substituted here.
    pub lord: Graha,
    /// Grahas in this sign, `ALL_GRAHAS` order.
    pub occupants: Vec<Graha>,
}

/// The twelve houses counted from the lagna sign.
pub fn whole_sign_houses(lagna: Rashi, placements: &GrahaPlacements) -> [House; 12] {
    std::array::from_fn(|i| {
        let rashi = lagna.forward(i as u8);
        House {
            number: i as u8 + 1,
            rashi,
            lord: rashi_lord(rashi),
            occupants: ALL_GRAHAS
                .into_iter()
                .filter(|&g| placements.rashi_of(g) == rashi)
                .collect(),
        }
    })
}

/// House (1..=12) a graha occupies counted from the lagna.
pub const fn house_of(graha: Graha, lagna: Rashi, placements: &GrahaPlacements) -> u8 {
    lagna.distance_forward(placements.rashi_of(graha)) + 1
}
