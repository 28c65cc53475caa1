//! Engine error taxonomy.
//!
//! Lower crates report in their own terms; every public entry point here
//! folds those into [`EngineError`].

use kundali_ephem::EphemError;
use kundali_time::TimeError;
use kundali_vedic::{HouseSystem, VedicError};
use thiserror::Error;

/// Errors returned by every `compute_*` entry point.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Missing or malformed input field.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Instant outside the span the ephemeris is fitted to.
    #[error("julian day {jd} is outside the supported span [{start}, {end})")]
    DateOutOfRange { jd: f64, start: f64, end: f64 },
    /// Timezone cannot be resolved to an offset at the local instant.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
    /// The requested house system has no solution at this latitude.
    #[error("{system} houses are undefined at latitude {latitude}°")]
    HouseSystemUndefinedAtLatitude { system: HouseSystem, latitude: f64 },
    /// Divisional chart code not recognised.
    #[error("unsupported divisional chart: {0}")]
    UnsupportedDivisionalChart(String),
    /// Interpretation request is missing its natal chart or names an unknown option.
    #[error("inconsistent interpretation request: {0}")]
    InconsistentInterpretationRequest(String),
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::UnknownZone(zone) => Self::InvalidTimezone(zone),
            TimeError::NonexistentLocalTime { .. } => Self::InvalidTimezone(e.to_string()),
            TimeError::OutOfSpan { jd, start, end } => Self::DateOutOfRange { jd, start, end },
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<EphemError> for EngineError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::Time(t) => t.into(),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<VedicError> for EngineError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::UndefinedAtLatitude {
                system,
                latitude_deg,
            } => Self::HouseSystemUndefinedAtLatitude {
                system,
                latitude: latitude_deg,
            },
            VedicError::UnknownAmsha(code) => Self::UnsupportedDivisionalChart(code),
            VedicError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_errors_map_to_taxonomy() {
        let e: EngineError = TimeError::UnknownZone("Mars/Base".into()).into();
        assert_eq!(e, EngineError::InvalidTimezone("Mars/Base".into()));

        let e: EngineError = TimeError::OutOfSpan {
            jd: 1.0,
            start: 2.0,
            end: 3.0,
        }
        .into();
        assert!(matches!(e, EngineError::DateOutOfRange { jd, .. } if jd == 1.0));
    }

    #[test]
    fn dst_gap_is_a_timezone_error() {
        let e: EngineError = TimeError::NonexistentLocalTime {
            local: "2021-03-14 02:30:00".into(),
            zone: "America/New_York".into(),
        }
        .into();
        assert!(matches!(e, EngineError::InvalidTimezone(msg) if msg.contains("New_York")));
    }

    #[test]
    fn nested_ephemeris_span_error() {
        let e: EngineError = EphemError::Time(TimeError::OutOfSpan {
            jd: 0.0,
            start: 1.0,
            end: 2.0,
        })
        .into();
        assert!(matches!(e, EngineError::DateOutOfRange { .. }));
    }

    #[test]
    fn vedic_errors_map_to_taxonomy() {
        let e: EngineError = VedicError::UndefinedAtLatitude {
            system: HouseSystem::Placidus,
            latitude_deg: 70.0,
        }
        .into();
        assert_eq!(
            e,
            EngineError::HouseSystemUndefinedAtLatitude {
                system: HouseSystem::Placidus,
                latitude: 70.0
            }
        );
        let e: EngineError = VedicError::UnknownAmsha("D11".into()).into();
        assert_eq!(e, EngineError::UnsupportedDivisionalChart("D11".into()));
    }
}
