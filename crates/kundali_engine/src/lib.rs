//! Deterministic Vedic chart engine.
//!
//! Every entry point is a pure function of its inputs (transits default to
//! the current instant when none is given):
//!
//! - [`compute_natal_chart`]: sidereal positions and houses
//! - [`compute_divisions`]: divisional charts D1..D60
//! - [`compute_vimshottari`], [`compute_antardashas`], [`vimshottari_hierarchy`],
//!   [`active_dashas`]: Vimshottari periods
//! - [`compute_shadbala`], [`compute_ashtakavarga`]: strength
//! - [`compute_transit`]: current sky against the natal chart
//! - [`generate_interpretation`]: narrative in five moods and three lengths
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::{NaiveDate, NaiveTime};
//! use kundali_engine::*;
//!
//! let birth = BirthDetails::new(
//!     "example",
//!     NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
//!     NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
//!     "Asia/Kolkata",
//!     28.6139,
//!     77.2090,
//! );
//! let chart = compute_natal_chart(&birth, &ChartConfig::default())?;
//! let d9 = compute_divisions(&birth, "D9", &chart.planets, &chart.houses)?;
//! ```

pub mod birth;
pub mod chart;
pub mod config;
pub mod dasha;
pub mod divisions;
pub mod error;
pub mod interpret;
pub mod strength;
pub mod transit;

pub use birth::BirthDetails;
pub use chart::{House, NatalChart, PlanetPosition, compute_natal_chart};
pub use config::{ChartConfig, DashaConfig, EngineConfig, MAX_DASHA_DEPTH, TransitConfig};
pub use dasha::{
    DatedPeriod, active_dashas, compute_antardashas, compute_vimshottari, dasha_balance,
    vimshottari_hierarchy,
};
pub use divisions::{DivisionalChart, DivisionalPlacement, compute_divisions};
pub use error::EngineError;
pub use interpret::{
    ALL_LENGTHS, ALL_MOODS, InterpretationMetrics, InterpretationRequest, InterpretationResult,
    Length, Mood, generate_interpretation,
};
pub use strength::{
    AshtakavargaReport, PlanetBindus, ShadbalaResult, compute_ashtakavarga, compute_shadbala,
};
pub use transit::{TransitEntry, TransitFlag, compute_transit};

// Re-export the vocabulary types callers need without depending on the
// lower crates directly.
pub use kundali_ephem::{Ayanamsa, NodeMode};
pub use kundali_vedic::dasha::{BirthBalance, DashaHierarchy, DashaLevel, DashaPeriod};
pub use kundali_vedic::{Amsha, Graha, HouseSystem, ShadbalaComponent};
