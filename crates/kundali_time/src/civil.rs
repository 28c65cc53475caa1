//! Civil (wall-clock) time to UTC resolution.
//!
//! A zone is either an IANA name resolved through the bundled tz database
//! (historical DST included) or a fixed offset written `±HH:MM`, `±HHMM`,
//! `±HH`, `UTC`, `GMT` or `Z`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// A parsed timezone designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// IANA tz database zone.
    Iana(Tz),
    /// Constant offset from UTC.
    Fixed(FixedOffset),
}

impl Zone {
    /// Parse a zone designator.
    pub fn parse(name: &str) -> Result<Self, TimeError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TimeError::UnknownZone(name.to_string()));
        }
        if let Some(offset) = parse_fixed_offset(trimmed) {
            return Ok(Self::Fixed(offset));
        }
        trimmed
            .parse::<Tz>()
            .map(Self::Iana)
            .map_err(|_| TimeError::UnknownZone(name.to_string()))
    }
}

/// A wall-clock time resolved to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInstant {
    pub utc: DateTime<Utc>,
    /// Offset in effect at the instant, seconds east of UTC.
    pub offset_seconds: i32,
}

fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    if matches!(s.to_ascii_uppercase().as_str(), "UTC" | "GMT" | "Z") {
        return FixedOffset::east_opt(0);
    }
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 14 || minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Resolve a local date and time in `zone` to a UTC instant.
///
/// A wall-clock time that repeats (DST fall-back) resolves to the earlier
/// instant. A wall-clock time skipped by a DST gap is an error.
pub fn resolve_local(
    date: NaiveDate,
    time: NaiveTime,
    zone: &str,
) -> Result<ResolvedInstant, TimeError> {
    let naive = NaiveDateTime::new(date, time);
    match Zone::parse(zone)? {
        Zone::Fixed(offset) => resolve_in(&offset, &naive, zone),
        Zone::Iana(tz) => resolve_in(&tz, &naive, zone),
    }
}

fn resolve_in<Z: TimeZone>(
    tz: &Z,
    naive: &NaiveDateTime,
    zone: &str,
) -> Result<ResolvedInstant, TimeError> {
    let local = tz
        .from_local_datetime(naive)
        .earliest()
        .ok_or_else(|| TimeError::NonexistentLocalTime {
            local: naive.to_string(),
            zone: zone.to_string(),
        })?;
    Ok(ResolvedInstant {
        offset_seconds: local.offset().fix().local_minus_utc(),
        utc: local.with_timezone(&Utc),
    })
}
