//! Birth moment: local civil date/time plus a fixed UTC offset.
//!
//! The offset is resolved to a UTC instant once, at construction, so the
//! rest of the pipeline only ever sees `DateTime<Utc>` / JD UT.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

use crate::error::TimeError;
use crate::julian::datetime_to_jd;

/// A birth instant as recorded locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMoment {
    local: NaiveDateTime,
    offset: FixedOffset,
    utc: DateTime<Utc>,
}

impl BirthMoment {
    /// Resolve a local civil time against its UTC offset.
    pub fn new(local: NaiveDateTime, offset: FixedOffset) -> Result<Self, TimeError> {
        let utc = offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| TimeError::Unresolvable(local.to_string()))?
            .with_timezone(&Utc);
        Ok(Self { local, offset, utc })
    }

    /// Parse `YYYY-MM-DD`, `HH:MM[:SS]` and an offset such as `+05:30` or `5.5`.
    pub fn parse(date: &str, time: &str, offset: &str) -> Result<Self, TimeError> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| TimeError::InvalidDate(date.to_string()))?;
        let t = parse_time(time)?;
        Self::new(d.and_time(t), parse_utc_offset(offset)?)
    }

    /// Local civil date/time as given.
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// Fixed offset east of UTC.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Offset east of UTC in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// The birth instant in UTC.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// The birth instant as Julian Day (UT).
    pub fn jd_ut(&self) -> f64 {
        datetime_to_jd(&self.utc)
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Parse a UTC offset written as `±HH:MM` or as decimal hours (`5.5`, `-3`).
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, TimeError> {
    let raw = s.trim();
    let invalid = || TimeError::InvalidOffset(s.to_string());

    let seconds = if let Some((h, m)) = raw.split_once(':') {
        let negative = h.starts_with('-');
        let hours: i32 = h
            .trim_start_matches(['+', '-'])
            .parse()
            .map_err(|_| invalid())?;
        let minutes: i32 = m.parse().map_err(|_| invalid())?;
        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(invalid());
        }
        let total = hours * 3600 + minutes * 60;
        if negative { -total } else { total }
    } else {
        let hours: f64 = raw.parse().map_err(|_| invalid())?;
        if !hours.is_finite() {
            return Err(invalid());
        }
        (hours * 3600.0).round() as i32
    };

    FixedOffset::east_opt(seconds).ok_or_else(invalid)
}

/// Approximate a civil offset from geographic longitude (15° per hour,
/// rounded to the nearest half hour). Used when no offset is recorded.
pub fn estimate_utc_offset(longitude_deg: f64) -> FixedOffset {
    let lon = (longitude_deg + 180.0).rem_euclid(360.0) - 180.0;
    let half_hours = (lon / 15.0 * 2.0).round();
    let seconds = (half_hours * 1800.0) as i32;
    FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_colon_offset() {
        let off = parse_utc_offset("+05:30").unwrap();
        assert_eq!(off.local_minus_utc(), 19_800);
        let off = parse_utc_offset("-03:00").unwrap();
        assert_eq!(off.local_minus_utc(), -10_800);
    }

    #[test]
    fn parse_decimal_offset() {
        assert_eq!(parse_utc_offset("5.5").unwrap().local_minus_utc(), 19_800);
        assert_eq!(parse_utc_offset("-8").unwrap().local_minus_utc(), -28_800);
    }

    #[test]
    fn reject_bad_offsets() {
        assert!(parse_utc_offset("abc").is_err());
        assert!(parse_utc_offset("+05:75").is_err());
        assert!(parse_utc_offset("30").is_err());
    }

    #[test]
    fn reject_out_of_range_hours() {
        for s in ["999999:00", "1193047:00", "-2147483647:00", "24:00", "+99:30"] {
            assert!(
                matches!(parse_utc_offset(s), Err(TimeError::InvalidOffset(_))),
                "{s} accepted"
            );
        }
        assert_eq!(parse_utc_offset("23:59").unwrap().local_minus_utc(), 86_340);
        assert!(parse_utc_offset("1e12").is_err());
    }

    #[test]
    fn birth_resolves_to_utc() {
        let b = BirthMoment::parse("2001-05-26", "21:48", "5.5").unwrap();
        let utc = b.utc();
        assert_eq!(utc.year(), 2001);
        assert_eq!(utc.month(), 5);
        assert_eq!(utc.day(), 26);
        assert_eq!(utc.hour(), 16);
        assert_eq!(utc.minute(), 18);
        assert_eq!(b.offset_minutes(), 330);
    }

    #[test]
    fn birth_crossing_midnight() {
        let b = BirthMoment::parse("2020-01-01", "02:00:00", "+05:30").unwrap();
        assert_eq!(b.utc().day(), 31);
        assert_eq!(b.utc().year(), 2019);
    }

    #[test]
    fn birth_rejects_malformed_fields() {
        assert!(matches!(
            BirthMoment::parse("2001/05/26", "21:48", "5.5"),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            BirthMoment::parse("2001-05-26", "9pm", "5.5"),
            Err(TimeError::InvalidTime(_))
        ));
    }

    #[test]
    fn estimated_offset_rounds_to_half_hour() {
        // 74.65° E → 4.977 h → 5.0 h
        assert_eq!(estimate_utc_offset(74.65).local_minus_utc(), 18_000);
        // 82.5° E → 5.5 h
        assert_eq!(estimate_utc_offset(82.5).local_minus_utc(), 19_800);
        assert_eq!(estimate_utc_offset(-75.0).local_minus_utc(), -18_000);
    }
}
