//! Vedic chart mathematics on sidereal longitudes.
//!
//! This crate provides:
//! - Rashi, nakshatra and graha classification
//! - Lagna/MC and house division (whole sign, equal, Placidus)
//! - Divisional charts (Shodashavarga)
//! - Vimshottari dasha to five levels
//! - Shadbala and Ashtakavarga
//!
//! Everything here is pure math on plain numbers; no ephemeris or clock.

pub mod amsha;
pub mod ashtakavarga;
pub mod bhava;
pub mod dasha;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod shadbala;
pub mod util;

pub use amsha::{ALL_AMSHAS, Amsha, AmshaPosition, amsha_position, amsha_rashi};
pub use ashtakavarga::{
    AshtakavargaResult, BAV_TOTALS, BhinnaAshtakavarga, SAV_TOTAL, SarvaAshtakavarga,
    calculate_ashtakavarga, calculate_bav,
};
pub use bhava::{
    ALL_HOUSE_SYSTEMS, Bhava, BhavaResult, HouseFrame, HouseSystem, MAX_PLACIDUS_LATITUDE_DEG,
    compute_bhavas, house_of,
};
pub use dasha::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, MAX_DASHA_LEVEL, VIMSHOTTARI_SEQUENCE,
    find_active_period, vimshottari_children, vimshottari_hierarchy, vimshottari_mahadashas,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use graha_relationships::Dignity;
pub use lagna::{lagna_and_mc_deg, lagna_deg, mc_deg};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{ALL_RASHIS, Dms, Modality, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use shadbala::{
    ALL_COMPONENTS, ShadbalaBreakdown, ShadbalaComponent, ShadbalaInputs, all_shadbalas, shadbala,
};
pub use util::{arc_contains, normalize_360, separation};
