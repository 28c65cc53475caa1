//! Julian Day ⇄ calendar conversions.
//!
//! Gregorian calendar only. Source: Meeus, "Astronomical Algorithms"
//! (2nd ed), Chapter 7.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// Julian Day from a Gregorian calendar date with fractional day.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed,
/// e.g. `15.4375` for the 15th at 10:30.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Gregorian calendar date from a Julian Day.
///
/// Returns `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Day (UTC) of a chrono instant, millisecond resolution.
pub fn datetime_to_jd(instant: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + instant.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Chrono instant of a Julian Day (UTC), rounded to the millisecond.
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::Unrepresentable(jd));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::Unrepresentable(jd));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::Unrepresentable(jd))
}
