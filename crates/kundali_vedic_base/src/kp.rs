//! KP (Krishnamurti Paddhati) lord hierarchy.
//!
//! Every longitude has four lords at increasing resolution:
//!
//! 1. sign lord: ruler of the rashi;
//! 2. nakshatra lord: Vimshottari lord of the nakshatra;
//! 3. sub lord: the nakshatra span is divided among the 9 Vimshottari
//!    lords in proportion to their years (out of 120), starting from the
//!    nakshatra lord;
//! 4. sub-sub lord: the sub lord's span is divided the same way,
//!    starting from the sub lord.
//!
//! Levels 3 and 4 are the same proportional search applied twice.

use serde::Serialize;

use crate::dasha::vimshottari_data::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, nakshatra_lord_position,
    vimshottari_position,
};
use crate::graha::{Graha, rashi_lord};
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};
use crate::rashi::rashi_from_longitude;

/// The four KP lords of one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KpLords {
    pub sign_lord: Graha,
    pub nakshatra_lord: Graha,
    pub sub_lord: Graha,
    pub sub_sub_lord: Graha,
}

/// Vimshottari lord of a nakshatra (0-26).
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_GRAHAS[nakshatra_lord_position(nakshatra_index)]
}

/// One lord's share of a span.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Share {
    /// Position in the Vimshottari sequence.
    position: usize,
    /// Start of the share, measured from the start of the span.
    offset: f64,
    width: f64,
}

/// Find which lord owns `residual` degrees into a span of `span` degrees,
/// when the span is shared out in Vimshottari proportion starting from
/// sequence position `start`.
///
/// The first share whose cumulative end reaches `residual` (>=) owns it, so
/// an exact boundary belongs to the earlier lord. If float drift leaves
/// the residual past every end, the last share owns it.
fn proportional_owner(residual: f64, span: f64, start: usize) -> Share {
    let total = VIMSHOTTARI_TOTAL_YEARS as f64;
    let mut cumulative = 0.0;
    for step in 0..9 {
        let position = (start + step) % 9;
        let width = span * VIMSHOTTARI_YEARS[position] as f64 / total;
        let end = cumulative + width;
        if end >= residual {
            return Share {
                position,
                offset: cumulative,
                width,
            };
        }
        cumulative = end;
    }

    let position = (start + 8) % 9;
    let width = span * VIMSHOTTARI_YEARS[position] as f64 / total;
    Share {
        position,
        offset: span - width,
        width,
    }
}

/// Resolve all four KP lords of a sidereal longitude.
pub fn kp_lords(sidereal_lon: f64) -> KpLords {
    let rashi = rashi_from_longitude(sidereal_lon);
    let nak = nakshatra_from_longitude(sidereal_lon);
    let nak_lord = nakshatra_lord(nak.nakshatra_index);

    let sub = proportional_owner(
        nak.degrees_in_nakshatra,
        NAKSHATRA_SPAN_27,
        vimshottari_position(nak_lord),
    );
    let sub_sub = proportional_owner(
        nak.degrees_in_nakshatra - sub.offset,
        sub.width,
        sub.position,
    );

    KpLords {
        sign_lord: rashi_lord(rashi.rashi),
        nakshatra_lord: nak_lord,
        sub_lord: VIMSHOTTARI_GRAHAS[sub.position],
        sub_sub_lord: VIMSHOTTARI_GRAHAS[sub_sub.position],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_fill_the_span() {
        let mut sum = 0.0;
        for p in 0..9 {
            sum += NAKSHATRA_SPAN_27 * VIMSHOTTARI_YEARS[p] as f64 / 120.0;
        }
        assert!((sum - NAKSHATRA_SPAN_27).abs() < 1e-12);
    }

    #[test]
    fn zero_residual_belongs_to_first_share() {
        let s = proportional_owner(0.0, NAKSHATRA_SPAN_27, 3);
        assert_eq!(s.position, 3);
        assert!(s.offset.abs() < 1e-15);
    }

    #[test]
    fn exact_boundary_belongs_to_earlier_lord() {
        // Ketu's share of Ashwini ends at 7/120 * 13.333 = 0.7777...
        let ketu_end = NAKSHATRA_SPAN_27 * 7.0 / 120.0;
        let s = proportional_owner(ketu_end, NAKSHATRA_SPAN_27, 0);
        assert_eq!(VIMSHOTTARI_GRAHAS[s.position], Graha::Ketu);
    }

    #[test]
    fn overshoot_falls_back_to_last_share() {
        let s = proportional_owner(NAKSHATRA_SPAN_27 + 1e-9, NAKSHATRA_SPAN_27, 0);
        assert_eq!(VIMSHOTTARI_GRAHAS[s.position], Graha::Buddh);
        assert!((s.offset + s.width - NAKSHATRA_SPAN_27).abs() < 1e-12);
    }

    #[test]
    fn start_of_ashwini() {
        let l = kp_lords(0.0);
        assert_eq!(l.sign_lord, Graha::Mangal);
        assert_eq!(l.nakshatra_lord, Graha::Ketu);
        assert_eq!(l.sub_lord, Graha::Ketu);
        assert_eq!(l.sub_sub_lord, Graha::Ketu);
    }

    #[test]
    fn one_degree_aries() {
        // Ketu share ends 0.778; Shukra runs to 3.0
        let l = kp_lords(1.0);
        assert_eq!(l.nakshatra_lord, Graha::Ketu);
        assert_eq!(l.sub_lord, Graha::Shukra);
        // 0.222 into Shukra's 2.222 span; Shukra's own sub-share is 0.370
        assert_eq!(l.sub_sub_lord, Graha::Shukra);
    }

    #[test]
    fn bharani_nineteen_point_three_two() {
        // 5.9867 deg into Bharani (Shukra): Shukra, Surya, Chandra, Mangal end
        // at 4.7778; Rahu runs to 6.7778. 1.2089 into Rahu's 2 deg share:
        // Rahu .30, Guru .567, Shani .883, Buddh 1.167, Ketu 1.283.
        let l = kp_lords(19.32);
        assert_eq!(l.sign_lord, Graha::Mangal);
        assert_eq!(l.nakshatra_lord, Graha::Shukra);
        assert_eq!(l.sub_lord, Graha::Rahu);
        assert_eq!(l.sub_sub_lord, Graha::Ketu);
    }

    #[test]
    fn nakshatra_lords_cycle() {
        assert_eq!(nakshatra_lord(1), Graha::Shukra);
        assert_eq!(nakshatra_lord(6), Graha::Guru);
        assert_eq!(nakshatra_lord(18), Graha::Ketu);
    }

    #[test]
    fn idempotent() {
        for lon in [0.0, 19.32, 123.456, 254.0, 359.99] {
            assert_eq!(kp_lords(lon), kp_lords(lon));
            assert_eq!(kp_lords(lon), kp_lords(lon + 360.0));
        }
    }
}
