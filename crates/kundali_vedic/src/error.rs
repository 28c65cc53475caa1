//! Error types for Vedic calculations.

use thiserror::Error;

use crate::bhava::HouseSystem;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// House system has no solution at this latitude.
    #[error("{system} houses are undefined at latitude {latitude_deg}°")]
    UndefinedAtLatitude {
        system: HouseSystem,
        latitude_deg: f64,
    },
    /// Divisional chart code is not recognised.
    #[error("unsupported divisional chart: {0}")]
    UnknownAmsha(String),
    /// A period at the deepest level has no sub-periods.
    #[error("{0} has no sub-periods")]
    NoChildLevel(&'static str),
    /// Malformed input to a pure calculation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
