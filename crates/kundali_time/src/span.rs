//! Supported time span of the engine.
//!
//! The planetary mean elements are fitted to 1800–2050, so every chart and
//! transit instant must fall inside `[SPAN_START_JD, SPAN_END_JD)`.

use crate::error::TimeError;

/// 1800-Jan-01 00:00 UTC.
pub const SPAN_START_JD: f64 = 2_378_496.5;

/// 2051-Jan-01 00:00 UTC (exclusive).
pub const SPAN_END_JD: f64 = 2_470_172.5;

/// Whether a UTC Julian Day lies in the supported span.
pub fn in_span(jd: f64) -> bool {
    (SPAN_START_JD..SPAN_END_JD).contains(&jd)
}

/// Fail with [`TimeError::OutOfSpan`] unless `jd` is in the supported span.
pub fn check_span(jd: f64) -> Result<(), TimeError> {
    if in_span(jd) {
        Ok(())
    } else {
        Err(TimeError::OutOfSpan {
            jd,
            start: SPAN_START_JD,
            end: SPAN_END_JD,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn bounds_match_calendar() {
        assert_eq!(calendar_to_jd(1800, 1, 1.0), SPAN_START_JD);
        assert_eq!(calendar_to_jd(2051, 1, 1.0), SPAN_END_JD);
    }

    #[test]
    fn lower_bound_closed_upper_open() {
        assert!(check_span(SPAN_START_JD).is_ok());
        assert!(check_span(SPAN_END_JD).is_err());
        assert!(check_span(SPAN_END_JD - 1e-6).is_ok());
        assert!(check_span(SPAN_START_JD - 1e-6).is_err());
    }

    #[test]
    fn nan_is_out_of_span() {
        assert!(!in_span(f64::NAN));
    }
}
