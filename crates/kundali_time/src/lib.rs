//! Birth-time handling and Julian Day conversions.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `chrono` instant ↔ Julian Day (UT) conversions
//! - `BirthMoment`: local civil time + UTC offset, resolved once to UTC

pub mod birth;
pub mod error;
pub mod julian;

pub use birth::{BirthMoment, estimate_utc_offset, parse_utc_offset};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, datetime_to_jd, jd_to_calendar,
    jd_to_datetime,
};
