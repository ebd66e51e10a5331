//! Pass scoring weights

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassConfig {
    // === Bonuses / penalties ===
    /// Receiver is the goalkeeper (default: -10)
    pub goalkeeper_penalty: f64,
    /// Target behind the ball (default: -5)
    pub backward_penalty: f64,
    /// Pass into space ahead of the receiver (default: +5)
    pub advanced_bonus: f64,
    /// An opponent sits on the ball→target line (default: -20)
    pub occluded_penalty: f64,
    /// Kick direction outside the facing cone (default: -25)
    pub out_of_angle_penalty: f64,

    // === Distance preference ===
    /// Preferred pass length in m (default: 10)
    pub favourite_distance: f64,
    /// Per-meter weight of |favourite - actual| (default: -0.1)
    pub distance_weight: f64,
    /// How far ahead of the receiver an advanced pass lands (default: 5)
    pub advanced_length: f64,

    // === Own goal ===
    /// Trajectory crossing our goal mouth closer than this is penalised (default: 6)
    pub own_goal_threshold: f64,
    /// Penalty at zero distance, fading linearly to 0 at the threshold (default: -15)
    pub own_goal_penalty: f64,

    /// Best pass must exceed this or the player dribbles (default: 0.1)
    pub minimum_pass_value: f64,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            goalkeeper_penalty: -10.0,
            backward_penalty: -5.0,
            advanced_bonus: 5.0,
            occluded_penalty: -20.0,
            out_of_angle_penalty: -25.0,

            favourite_distance: 10.0,
            distance_weight: -0.1,
            advanced_length: 5.0,

            own_goal_threshold: 6.0,
            own_goal_penalty: -15.0,

            minimum_pass_value: 0.1,
        }
    }
}
