//! Pure Vedic chart arithmetic on sidereal longitudes.
//!
//! This crate provides:
//! - Rashi (sign) and nakshatra (lunar mansion) lookup
//! - Varga (harmonic divisional chart) placement for the 16 Shodashavarga charts
//! - KP sign / nakshatra / sub / sub-sub lord resolution
//! - Yogini, Chara and Vimshottari dasha period generation
//! - Panchang limbs, Ashtakavarga points and whole-sign D1 houses
//!
//! Nothing here talks to an ephemeris. Every function is a pure function of
//! the longitudes and Julian Days it is handed; the orchestration layer
//! (`kundali_chart`) assembles those inputs.

pub mod ashtakavarga;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod houses;
pub mod kp;
pub mod lordship;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod util;
pub mod varga;

pub use ashtakavarga::{
    Ashtakavarga, BAV_TOTALS, Bhinnashtakavarga, SAV_TOTAL, Sarvashtakavarga, SignPoints,
    ashtakavarga, bhinnashtakavarga, ekadhipatya_sodhana, sarvashtakavarga, trikona_sodhana,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use houses::{House, house_of, whole_sign_houses};
pub use kp::{KpLords, kp_lords, nakshatra_lord};
pub use lordship::{DUAL_LORDSHIPS, DualLordship, GrahaPlacements, effective_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use panchang::{
    Karana, KaranaPosition, Panchang, Paksha, Tithi, TithiPosition, Vaar, Yoga, YogaPosition,
    karana_from_elongation, panchang, tithi_from_elongation, vaar_from_jd, yoga_from_sum,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiElement, RashiInfo, SignType, deg_to_dms, dms_to_deg,
    rashi_from_longitude,
};
pub use util::{normalize_360, opposite_longitude, validate_longitude};
pub use varga::{
    SHODASHAVARGA, Varga, VargaChart, VargaPlacement, VargaPosition, varga_chart, varga_house,
    varga_position,
};
