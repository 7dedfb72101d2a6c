//! Julian Date ↔ calendar conversions.
//!
//! Calendar arithmetic follows Meeus, *Astronomical Algorithms*, ch. 7
//! (proleptic Gregorian). Instant conversions go through the Unix epoch so
//! that sub-second precision survives the round trip through `chrono`.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Gregorian calendar date (with fractional day) to Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let y = year as f64;
    let m = month as f64;
    let (y2, m2) = if m <= 2.0 {
        (y - 1.0, m + 12.0)
    } else {
        (y, m)
    };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date to Gregorian `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// UTC instant to Julian Date (UT).
pub fn datetime_to_jd(instant: &DateTime<Utc>) -> f64 {
    let secs = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// Julian Date (UT) to a UTC instant, rounded to the nearest millisecond.
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::JdOutOfRange(jd));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > i64::MAX as f64 / 2.0 {
        return Err(TimeError::JdOutOfRange(jd));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::JdOutOfRange(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_from_calendar() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn unix_epoch_from_calendar() {
        let jd = calendar_to_jd(1970, 1, 1.0);
        assert!((jd - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn january_and_february_use_previous_year() {
        // 1987-01-27.0 = JD 2446822.5 (Meeus)
        let jd = calendar_to_jd(1987, 1, 27.0);
        assert!((jd - 2_446_822.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn calendar_inverse() {
        let (y, m, d) = jd_to_calendar(2_451_545.0);
        assert_eq!(y, 2000);
        assert_eq!(m, 1);
        assert!((d - 1.5).abs() < 1e-9);
    }

    #[test]
    fn datetime_to_jd_j2000() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).single();
        let t = t.expect("valid instant");
        assert!((datetime_to_jd(&t) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn jd_datetime_inverse_to_the_millisecond() {
        let jd = 2_452_056.179_166_666_7;
        let back = datetime_to_jd(&jd_to_datetime(jd).expect("in range"));
        assert!((back - jd).abs() * SECONDS_PER_DAY < 1e-3);
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(matches!(
            jd_to_datetime(f64::NAN),
            Err(TimeError::JdOutOfRange(_))
        ));
        assert!(jd_to_datetime(f64::INFINITY).is_err());
    }
}
