//! Off-ball positioning and shooting thresholds

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositioningConfig {
    // === Shooting ===
    /// Closer than this to the goal centre: shoot (default: 8)
    pub score_distance: f64,
    /// Intervals across the goal mouth; targets = intervals + 1 (default: 12)
    pub attack_intervals: usize,

    // === Marking ===
    /// Stand this far from the marked opponent, goal side (default: 1)
    pub mark_distance: f64,
    /// Ball behind `x2 * ratio` means defend (default: 0.5)
    pub go_back_ratio: f64,
    /// Opponent centroid within `|x2| * ratio` of our goal means defend (default: 0.25)
    pub centroid_ratio: f64,
    /// Behind `x1 * ratio` a free player runs forward (default: 2/3)
    pub run_forward_ratio: f64,

    // === Goalkeeper ===
    /// Rush the ball inside this distance when on our half (default: 3)
    pub goalkeeper_intervention: f64,
    /// Already in position below this offset: just face the ball (default: 0.5)
    pub goalkeeper_epsilon: f64,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            score_distance: 8.0,
            attack_intervals: 12,
            mark_distance: 1.0,
            go_back_ratio: 0.5,
            centroid_ratio: 0.25,
            run_forward_ratio: 2.0 / 3.0,
            goalkeeper_intervention: 3.0,
            goalkeeper_epsilon: 0.5,
        }
    }
}
