//! Integration tests: wall-clock resolution feeding the Julian Day chain.

use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, NaiveTime};
use kundali_time::{
    TimeError, calendar_to_jd, check_span, datetime_to_jd, jd_to_calendar, resolve_local,
};
use proptest::prelude::*;

/// A Kolkata birth at 10:30 local lands on 05:00 UTC of the same day.
#[test]
fn kolkata_birth_to_jd() {
    let date = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
    let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
    let resolved = resolve_local(date, time, "Asia/Kolkata").unwrap();
    let jd = datetime_to_jd(&resolved.utc);
    assert_abs_diff_eq!(
        jd,
        calendar_to_jd(1990, 1, 15.0 + 5.0 / 24.0),
        epsilon = 1e-8
    );
    assert!(check_span(jd).is_ok());
}

/// Fixed offsets and named zones agree when the zone has no DST.
#[test]
fn fixed_offset_equals_named_zone() {
    let date = NaiveDate::from_ymd_opt(2001, 6, 1).unwrap();
    let time = NaiveTime::from_hms_opt(23, 45, 0).unwrap();
    let named = resolve_local(date, time, "Asia/Kolkata").unwrap();
    let fixed = resolve_local(date, time, "+05:30").unwrap();
    assert_eq!(named.utc, fixed.utc);
}

/// Instants before 1800 are outside the span.
#[test]
fn early_instant_out_of_span() {
    let date = NaiveDate::from_ymd_opt(1799, 12, 31).unwrap();
    let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let resolved = resolve_local(date, time, "UTC").unwrap();
    let err = check_span(datetime_to_jd(&resolved.utc)).unwrap_err();
    assert!(matches!(err, TimeError::OutOfSpan { .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Calendar → JD → calendar is lossless across the supported span.
    #[test]
    fn calendar_roundtrip(
        year in 1800i32..2051,
        month in 1u32..=12,
        day in 1u32..=28,
        frac in 0.0f64..0.999
    ) {
        let jd = calendar_to_jd(year, month, day as f64 + frac);
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert_eq!((y, m), (year, month));
        prop_assert!((d - (day as f64 + frac)).abs() < 1e-6);
    }
}
