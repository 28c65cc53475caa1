//! Calendar, timezone and sidereal-time primitives.
//!
//! This crate provides:
//! - Julian Day ⇄ Gregorian calendar and chrono instant conversions
//! - Wall-clock resolution through the IANA tz database (historical DST)
//! - ΔT (TT − UT) polynomials
//! - Greenwich and local sidereal time
//! - The supported span check shared by every engine entry point

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod span;

pub use civil::{ResolvedInstant, Zone, resolve_local};
pub use delta_t::{decimal_year, delta_t_seconds, ut_to_tt_jd};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, datetime_to_jd,
    jd_to_calendar, jd_to_centuries, jd_to_datetime,
};
pub use sidereal::{
    earth_rotation_angle_rad, gmst_rad, local_sidereal_time_deg, local_sidereal_time_rad,
};
pub use span::{SPAN_END_JD, SPAN_START_JD, check_span, in_span};
