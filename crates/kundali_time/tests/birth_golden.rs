//! Golden values for birth-moment resolution and Julian Day conversion.

use chrono::{TimeZone, Utc};
use kundali_time::{BirthMoment, calendar_to_jd, datetime_to_jd, jd_to_calendar, jd_to_datetime};

#[test]
fn reference_birth_jd() {
    // 2001-05-26 21:48 IST = 16:18 UTC
    let b = BirthMoment::parse("2001-05-26", "21:48", "+05:30").unwrap();
    let expected = 2_452_055.5 + (16.0 + 18.0 / 60.0) / 24.0;
    assert!((b.jd_ut() - expected).abs() < 1e-8, "jd = {}", b.jd_ut());
}

#[test]
fn chrono_and_calendar_paths_agree() {
    let t = Utc.with_ymd_and_hms(1984, 8, 14, 3, 45, 30).single().unwrap();
    let via_chrono = datetime_to_jd(&t);
    let via_calendar = calendar_to_jd(1984, 8, 14.0 + (3.0 + 45.0 / 60.0 + 30.0 / 3600.0) / 24.0);
    assert!((via_chrono - via_calendar).abs() < 1e-8);
}

#[test]
fn calendar_round_trip_for_dasha_span() {
    for jd in [2_415_020.5, 2_451_545.0, 2_488_069.75] {
        let (y, m, d) = jd_to_calendar(jd);
        let back = calendar_to_jd(y, m, d);
        assert!((back - jd).abs() < 1e-8, "{jd} -> {y}-{m}-{d} -> {back}");
    }
}

#[test]
fn jd_renders_as_utc_instant() {
    let t = jd_to_datetime(2_451_545.0).unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).single().unwrap());
}

#[test]
fn birth_moment_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BirthMoment>();
}
