//! # Agent Configuration
//!
//! Every tuning constant of the heuristic agent in one place.
//!
//! ## Presets
//! - `default()`: reference tuning
//! - `cautious()`: safer passes, defends earlier
//! - `aggressive()`: shoots from farther, riskier passes
//!
//! ```rust
//! use s2d_core::engine::config::AgentConfig;
//!
//! let config = AgentConfig::default();
//! let aggressive = AgentConfig::aggressive();
//! assert!(aggressive.positioning.score_distance > config.positioning.score_distance);
//! ```

mod advance_config;
mod pass_config;
mod positioning_config;

pub use advance_config::AdvanceConfig;
pub use pass_config::PassConfig;
pub use positioning_config::PositioningConfig;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgentConfig {
    /// Pass scoring
    pub pass: PassConfig,
    /// Dribble sampling
    pub advance: AdvanceConfig,
    /// Off-ball positioning, shooting and goalkeeping
    #[serde(default)]
    pub positioning: PositioningConfig,
}

impl AgentConfig {
    pub fn cautious() -> Self {
        let mut cfg = Self::default();
        cfg.pass.occluded_penalty = -30.0;
        cfg.pass.backward_penalty = -2.0;
        cfg.pass.minimum_pass_value = -2.0;
        cfg.positioning.go_back_ratio = 0.25;
        cfg.positioning.centroid_ratio = 0.5;
        cfg.positioning.score_distance = 6.0;
        cfg
    }

    pub fn aggressive() -> Self {
        let mut cfg = Self::default();
        cfg.pass.advanced_bonus = 8.0;
        cfg.pass.occluded_penalty = -12.0;
        cfg.advance.advancing_incentive = 2.0;
        cfg.positioning.score_distance = 11.0;
        cfg.positioning.run_forward_ratio = 0.8;
        cfg
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = AgentConfig::default();
        assert_eq!(cfg.pass.goalkeeper_penalty, -10.0);
        assert_eq!(cfg.advance.intervals, 6);
        assert_eq!(cfg.positioning.attack_intervals, 12);
        assert!((cfg.positioning.run_forward_ratio - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cautious_passes_more_safely() {
        let base = AgentConfig::default();
        let cautious = AgentConfig::cautious();
        assert!(cautious.pass.occluded_penalty < base.pass.occluded_penalty);
        assert!(cautious.positioning.score_distance < base.positioning.score_distance);
        assert!(cautious.positioning.centroid_ratio > base.positioning.centroid_ratio);
    }

    #[test]
    fn test_aggressive_shoots_from_farther() {
        let base = AgentConfig::default();
        let aggressive = AgentConfig::aggressive();
        assert!(aggressive.positioning.score_distance > base.positioning.score_distance);
        assert!(aggressive.pass.advanced_bonus > base.pass.advanced_bonus);
    }

    #[test]
    fn test_missing_positioning_uses_default() {
        let json = serde_json::json!({
            "pass": serde_json::to_value(PassConfig::default()).unwrap(),
            "advance": serde_json::to_value(AdvanceConfig::default()).unwrap(),
        });
        let cfg: AgentConfig = serde_json::from_value(json).unwrap();
        assert_eq!(cfg.positioning, PositioningConfig::default());
    }
}
