//! Error types for calendar and timezone resolution.

use thiserror::Error;

/// Errors from civil-time resolution or span checks.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Zone name is neither a known IANA zone nor a parseable fixed offset.
    #[error("unknown timezone: {0}")]
    UnknownZone(String),
    /// Local wall-clock time falls in a DST gap of the zone.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: String, zone: String },
    /// Instant lies outside the supported span.
    #[error("julian day {jd} outside supported span [{start}, {end})")]
    OutOfSpan { jd: f64, start: f64, end: f64 },
    /// Julian Day cannot be represented as a calendar instant.
    #[error("julian day {0} is not representable as a UTC instant")]
    Unrepresentable(f64),
}
