//! Core types for Vimshottari dasha (planetary period) calculations.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length used for all dasha arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest supported level (0 = mahadasha .. 4 = pranadasha).
pub const MAX_DASHA_LEVEL: u8 = 4;

/// Default depth for hierarchy queries (mahadasha + antardasha).
pub const DEFAULT_DASHA_LEVEL: u8 = 1;

/// Hard cap on periods per level to prevent combinatorial explosion.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    pub const fn depth(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// A single dasha period, `[start_jd, end_jd)` in UTC Julian Days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Graha ruling the period.
    pub lord: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index of the parent in its level array; `None` at mahadasha level.
    pub parent_idx: Option<u32>,
    /// Lord of the parent period; `None` at mahadasha level.
    pub parent_lord: Option<Graha>,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in dasha years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Complete hierarchy: `levels[0]` = mahadashas, `levels[1]` = antardashas, ...
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaHierarchy {
    pub birth_jd: f64,
    pub levels: Vec<Vec<DashaPeriod>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dasha_level_from_u8() {
        assert_eq!(DashaLevel::from_u8(0), Some(DashaLevel::Mahadasha));
        assert_eq!(DashaLevel::from_u8(4), Some(DashaLevel::Pranadasha));
        assert_eq!(DashaLevel::from_u8(5), None);
    }

    #[test]
    fn dasha_level_child_chain() {
        let mut level = DashaLevel::Mahadasha;
        let mut depth = 0;
        while let Some(next) = level.child_level() {
            level = next;
            depth += 1;
            assert_eq!(level.depth(), depth);
        }
        assert_eq!(depth, MAX_DASHA_LEVEL);
    }

    #[test]
    fn contains_is_half_open() {
        let p = DashaPeriod {
            lord: Graha::Ketu,
            start_jd: 10.0,
            end_jd: 20.0,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: None,
            parent_lord: None,
        };
        assert!(p.contains(10.0));
        assert!(!p.contains(20.0));
        assert_abs_diff_eq!(p.duration_years(), 10.0 / DAYS_PER_YEAR, epsilon = 1e-15);
    }
}
