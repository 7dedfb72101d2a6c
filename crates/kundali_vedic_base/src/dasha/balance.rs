//! Birth balance for nakshatra-seeded dasha systems.
//!
//! The Moon's progress through its birth nakshatra says how much of the
//! first period had already run before birth. The first period is then
//! back-dated by that amount and kept at full length, so its end (and every
//! later boundary) lands where the remaining balance would put it.

use crate::nakshatra::nakshatra_from_longitude;

/// Moon position summary used to seed a nakshatra-based dasha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 0-based index (0=Ashwini..26=Revati) of the Moon's nakshatra.
    pub nakshatra_index: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Days of the first period that ran before birth.
    pub elapsed_days: f64,
}

impl BirthBalance {
    /// Days of the first period remaining after birth.
    pub fn remaining_days(&self, entry_period_days: f64) -> f64 {
        entry_period_days - self.elapsed_days
    }

    /// Start of the first period (JD), before or at birth.
    pub fn first_period_start(&self, birth_jd: f64) -> f64 {
        birth_jd - self.elapsed_days
    }
}

/// Compute the birth balance for a first period of `entry_period_days`.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> BirthBalance {
    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = nak.elapsed_fraction();
    BirthBalance {
        nakshatra_index: nak.nakshatra_index,
        elapsed_fraction,
        elapsed_days: entry_period_days * elapsed_fraction,
    }
}
