//! Error types for ephemeris evaluation.

use kundali_time::TimeError;
use thiserror::Error;

/// Errors from ephemeris queries.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Requested instant is outside the fitted span of the theories.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Finite-difference step must be positive and finite.
    #[error("invalid speed step: {0} days")]
    InvalidStep(f64),
    /// Ayanamsa name is not recognised.
    #[error("unknown ayanamsa: {0}")]
    UnknownAyanamsa(String),
}
