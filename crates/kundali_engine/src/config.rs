//! Engine configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! [chart]
//! node_mode = "mean"
//! speed_step_days = 0.5
//! placidus_fallback = "equal"
//!
//! [transit]
//! conjunction_orb = 5.0
//! notable_orb = 10.0
//!
//! [dasha]
//! depth = 2
//! ```

use std::path::Path;

use kundali_ephem::NodeMode;
use kundali_vedic::{DashaLevel, HouseSystem, MAX_DASHA_LEVEL};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Deepest dasha depth a caller may request (mahadasha = 1).
pub const MAX_DASHA_DEPTH: u8 = MAX_DASHA_LEVEL + 1;

/// Position and house options for natal and transit charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Mean or true lunar node.
    pub node_mode: NodeMode,
    /// Half-width of the central difference used for speeds, days.
    pub speed_step_days: f64,
    /// System to use when Placidus is undefined at the birth latitude.
    /// `None` makes that case an error.
    pub placidus_fallback: Option<HouseSystem>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            node_mode: NodeMode::Mean,
            speed_step_days: 0.5,
            placidus_fallback: None,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.speed_step_days.is_finite() && self.speed_step_days > 0.0) {
            return Err(EngineError::InvalidInput(format!(
                "speed_step_days must be positive, got {}",
                self.speed_step_days
            )));
        }
        if let Some(fallback) = self.placidus_fallback.filter(|h| h.latitude_dependent()) {
            return Err(EngineError::InvalidInput(format!(
                "placidus_fallback must work at every latitude, got {fallback}"
            )));
        }
        Ok(())
    }
}

/// Orbs for flagging transits against natal positions, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitConfig {
    pub conjunction_orb: f64,
    pub notable_orb: f64,
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            conjunction_orb: 5.0,
            notable_orb: 10.0,
        }
    }
}

impl TransitConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.conjunction_orb) || !positive(self.notable_orb) {
            return Err(EngineError::InvalidInput(
                "transit orbs must be positive".to_string(),
            ));
        }
        if self.conjunction_orb >= self.notable_orb {
            return Err(EngineError::InvalidInput(format!(
                "conjunction_orb {} must be below notable_orb {}",
                self.conjunction_orb, self.notable_orb
            )));
        }
        if self.notable_orb > 180.0 {
            return Err(EngineError::InvalidInput(
                "notable_orb cannot exceed 180°".to_string(),
            ));
        }
        Ok(())
    }
}

/// How many dasha levels to materialize (1 = mahadashas only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashaConfig {
    pub depth: u8,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

impl DashaConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        check_depth(self.depth).map(|_| ())
    }
}

/// Deepest level reached when `depth` levels are expanded.
pub(crate) fn check_depth(depth: u8) -> Result<DashaLevel, EngineError> {
    depth
        .checked_sub(1)
        .and_then(DashaLevel::from_u8)
        .ok_or_else(|| {
            EngineError::InvalidInput(format!(
                "dasha depth must be within 1..={MAX_DASHA_DEPTH}, got {depth}"
            ))
        })
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub chart: ChartConfig,
    pub transit: TransitConfig,
    pub dasha: DashaConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(s)
            .map_err(|e| EngineError::InvalidInput(format!("config: {}", e.message())))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            EngineError::InvalidInput(format!("cannot read config {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.chart.validate()?;
        self.transit.validate()?;
        self.dasha.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let parsed = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(parsed, EngineConfig::default());
    }

    #[test]
    fn full_document() {
        let cfg = EngineConfig::from_toml_str(
            r#"
            [chart]
            node_mode = "true"
            speed_step_days = 0.25
            placidus_fallback = "equal"

            [transit]
            conjunction_orb = 3.0
            notable_orb = 8.0

            [dasha]
            depth = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.chart.node_mode, NodeMode::True);
        assert_eq!(cfg.chart.placidus_fallback, Some(HouseSystem::Equal));
        assert_eq!(cfg.transit.notable_orb, 8.0);
        assert_eq!(cfg.dasha.depth, 3);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg = EngineConfig::from_toml_str("[transit]\nconjunction_orb = 2.0\n").unwrap();
        assert_eq!(cfg.transit.conjunction_orb, 2.0);
        assert_eq!(cfg.transit.notable_orb, 10.0);
        assert_eq!(cfg.chart, ChartConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        for doc in [
            "[transit]\nconjunction_orb = 10.0\nnotable_orb = 5.0\n",
            "[transit]\nconjunction_orb = 0.0\n",
            "[dasha]\ndepth = 0\n",
            "[dasha]\ndepth = 6\n",
            "[chart]\nspeed_step_days = -1.0\n",
            "[chart]\nplacidus_fallback = \"placidus\"\n",
            "[chart]\nnode_mode = \"osculating\"\n",
            "[chart]\nunknown = 1\n",
        ] {
            let result = EngineConfig::from_toml_str(doc);
            assert!(matches!(result, Err(EngineError::InvalidInput(_))), "{doc}");
        }
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let err = EngineConfig::load("/nonexistent/kundali.toml").unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(msg) if msg.contains("kundali.toml")));
    }
}
