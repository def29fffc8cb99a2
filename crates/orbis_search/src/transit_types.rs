//! Scan configuration.

use orbis_time::MINUTES_PER_DAY;
use serde::{Deserialize, Serialize};

use crate::aspect::AspectSelection;

/// Transit scan configuration.
///
/// The defaults reproduce AstroSeek-style monthly reports: major aspects
/// at a 10-minute coarse step with unscaled orbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Which aspects to match.
    pub aspects: AspectSelection,
    /// Coarse sampling step in minutes.
    pub step_minutes: f64,
    /// Multiplier applied to every base orb before luminary widening.
    pub orb_scale: f64,
    /// Events scoring below this are dropped after the scan. `0.0`
    /// disables the filter entirely.
    pub min_significance: f64,
}

impl TransitConfig {
    /// Major aspects, 10-minute step, unscaled orbs, no significance
    /// filter.
    pub fn new() -> Self {
        Self {
            aspects: AspectSelection::Major,
            step_minutes: 10.0,
            orb_scale: 1.0,
            min_significance: 0.0,
        }
    }

    /// Like [`new`](Self::new), but keeping only events scoring at least
    /// 6.0 — the cutoff used for human-facing transit reports.
    pub fn report_defaults() -> Self {
        Self {
            min_significance: 6.0,
            ..Self::new()
        }
    }

    /// Coarse step expressed in days.
    pub fn step_days(&self) -> f64 {
        self.step_minutes / MINUTES_PER_DAY
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_minutes.is_finite() || self.step_minutes <= 0.0 {
            return Err("step_minutes must be positive and finite");
        }
        if !self.orb_scale.is_finite() || self.orb_scale <= 0.0 {
            return Err("orb_scale must be positive and finite");
        }
        if !self.min_significance.is_finite() || self.min_significance < 0.0 {
            return Err("min_significance must be non-negative and finite");
        }
        if let AspectSelection::Custom(list) = &self.aspects {
            if list.is_empty() {
                return Err("custom aspect list must not be empty");
            }
        }
        Ok(())
    }
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::Aspect;

    #[test]
    fn defaults() {
        let config = TransitConfig::new();
        assert_eq!(config.aspects, AspectSelection::Major);
        assert!((config.step_minutes - 10.0).abs() < 1e-12);
        assert!((config.orb_scale - 1.0).abs() < 1e-12);
        assert!(config.min_significance.abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn report_defaults_filter_at_six() {
        let config = TransitConfig::report_defaults();
        assert!((config.min_significance - 6.0).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn step_days_conversion() {
        let config = TransitConfig::new();
        assert!((config.step_days() - 10.0 / 1_440.0).abs() < 1e-15);

        let hourly = TransitConfig {
            step_minutes: 60.0,
            ..TransitConfig::new()
        };
        assert!((hourly.step_days() - 1.0 / 24.0).abs() < 1e-15);
    }

    #[test]
    fn validation_rejects_bad_fields() {
        let mut config = TransitConfig::new();
        config.step_minutes = 0.0;
        assert!(config.validate().is_err());

        let mut config = TransitConfig::new();
        config.step_minutes = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = TransitConfig::new();
        config.orb_scale = -1.0;
        assert!(config.validate().is_err());

        let mut config = TransitConfig::new();
        config.min_significance = -0.5;
        assert!(config.validate().is_err());

        let mut config = TransitConfig::new();
        config.aspects = AspectSelection::Custom(vec![]);
        assert!(config.validate().is_err());

        let mut config = TransitConfig::new();
        config.aspects = AspectSelection::Custom(vec![Aspect::Square]);
        assert!(config.validate().is_ok());
    }
}
