//! Dribble sampling parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceConfig {
    /// Length of each sampled dribble segment in m (default: 3)
    pub checked_distance: f64,
    /// Intervals across the cone; samples = intervals + 1 (default: 6)
    pub intervals: usize,
    /// Bonus when the sample moves the ball forward (default: 1)
    pub advancing_incentive: f64,
    /// Fraction of half-width past which the touchline is dangerous (default: 0.9)
    pub danger_border_ratio: f64,
    /// Scale of the goal-proximity term (default: 50)
    pub goal_incentive: f64,
}

impl Default for AdvanceConfig {
    fn default() -> Self {
        Self {
            checked_distance: 3.0,
            intervals: 6,
            advancing_incentive: 1.0,
            danger_border_ratio: 0.9,
            goal_incentive: 50.0,
        }
    }
}
