//! Vimshottari dasha: the 120-year nakshatra-seeded period system.

pub mod balance;
pub mod query;
pub mod sequence;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use query::find_active_period;
pub use sequence::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, cycle_from, vimshottari_days,
    vimshottari_years,
};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DashaHierarchy, DashaLevel, DashaPeriod, MAX_DASHA_LEVEL,
};
pub use vimshottari::{
    active_chain, level_index, vimshottari_children, vimshottari_complete_level,
    vimshottari_hierarchy, vimshottari_mahadashas,
};
