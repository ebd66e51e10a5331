//! Tunable physical settings shared by every agent in a match
//!
//! ## Presets
//! ```rust
//! use s2d_core::engine::Settings;
//!
//! let four = Settings::default();
//! let five = Settings::five_a_side();
//! let eleven = Settings::eleven_a_side();
//! assert!(eleven.pitch_length > five.pitch_length);
//! assert!(five.pitch_length > four.pitch_length);
//! ```

use serde::{Deserialize, Serialize};

use super::constants::{body, cone, kinematics, noise, regulation};

/// Physical and behavioural constants for one match configuration.
///
/// Read-only for the duration of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Simplified rules: no facing cones for kicks
    pub simplified: bool,
    pub ticks_per_time: u32,

    // === Pitch ===
    pub pitch_length: f64,
    pub pitch_width: f64,
    pub goal_width: f64,
    pub center_radius: f64,
    pub pole_radius: f64,
    pub net_length: f64,

    // === Bodies and reach ===
    pub ball_radius: f64,
    pub player_radius: f64,
    pub catch_radius: f64,
    pub catch_holding_ticks: u32,
    pub kick_radius: f64,
    /// kick_radius + player_radius + ball_radius
    pub kickable_distance: f64,
    /// catch_radius + player_radius + ball_radius
    pub catchable_distance: f64,

    // === Cones ===
    pub kickable_angle: f64,
    pub kickable_direction_angle: f64,
    pub catchable_angle: f64,

    // === Restarts ===
    pub catchable_area_length: f64,
    pub catchable_area_width: f64,
    pub corner_min_distance: f64,
    pub throwin_min_distance: f64,
    pub out_pitch_limit: f64,

    // === Kinematics ===
    pub max_dash_power: f64,
    pub max_kick_power: f64,
    pub player_velocity_decay: f64,
    pub ball_velocity_decay: f64,
    pub max_player_speed: f64,
    pub max_ball_speed: f64,

    // === Noise ===
    pub catch_probability: f64,
    pub player_random_noise: f64,
    pub player_direction_noise: f64,
    pub player_velocity_direction_mix: f64,
    pub ball_inside_player_velocity_displace: f64,
    pub after_catch_distance: f64,
}

impl Settings {
    /// Build settings for a pitch, deriving reach distances and area sizes.
    pub fn with_pitch(
        simplified: bool,
        pitch_length: f64,
        pitch_width: f64,
        goal_width: f64,
        center_radius: f64,
    ) -> Self {
        let ball_radius = body::BALL_RADIUS;
        let player_radius = body::PLAYER_RADIUS;
        let kick_radius = body::KICK_RADIUS;
        let catch_radius = body::CATCH_RADIUS;

        Self {
            simplified,
            ticks_per_time: 3000,
            pitch_length,
            pitch_width,
            goal_width,
            center_radius,
            pole_radius: body::POLE_RADIUS,
            net_length: 1.5,
            ball_radius,
            player_radius,
            catch_radius,
            catch_holding_ticks: noise::CATCH_HOLDING_TICKS,
            kick_radius,
            kickable_distance: kick_radius + player_radius + ball_radius,
            catchable_distance: catch_radius + player_radius + ball_radius,
            kickable_angle: cone::KICKABLE_ANGLE,
            kickable_direction_angle: cone::KICKABLE_DIRECTION_ANGLE,
            catchable_angle: cone::CATCHABLE_ANGLE,
            catchable_area_length: regulation::area_length(pitch_length),
            catchable_area_width: regulation::area_width(pitch_width),
            corner_min_distance: regulation::corner_distance(pitch_width),
            throwin_min_distance: regulation::MIN_THROWIN_DISTANCE,
            out_pitch_limit: regulation::PLAYER_OUT_OF_PITCH_LIMIT,
            max_dash_power: kinematics::MAX_DASH_POWER,
            max_kick_power: kinematics::MAX_KICK_POWER,
            player_velocity_decay: kinematics::PLAYER_VELOCITY_DECAY,
            ball_velocity_decay: kinematics::BALL_VELOCITY_DECAY,
            max_player_speed: kinematics::MAX_PLAYER_SPEED,
            max_ball_speed: kinematics::MAX_BALL_SPEED,
            catch_probability: noise::CATCH_PROBABILITY,
            player_random_noise: noise::PLAYER_RANDOM_NOISE,
            player_direction_noise: noise::PLAYER_DIRECTION_NOISE,
            player_velocity_direction_mix: noise::PLAYER_VELOCITY_DIRECTION_MIX,
            ball_inside_player_velocity_displace: noise::BALL_INSIDE_PLAYER_VELOCITY_DISPLACE,
            after_catch_distance: noise::AFTER_CATCH_DISTANCE,
        }
    }

    /// 5-a-side: 40x24 with a 4m goal and 3m centre circle
    pub fn five_a_side() -> Self {
        Self::with_pitch(true, 40.0, 24.0, 4.0, 3.0)
    }

    /// Full regulation pitch
    pub fn eleven_a_side() -> Self {
        Self::with_pitch(
            true,
            regulation::PITCH_LENGTH,
            regulation::PITCH_WIDTH,
            regulation::GOAL_WIDTH,
            regulation::CENTER_RADIUS,
        )
    }

    /// Same configuration with facing cones enforced.
    pub fn with_full_rules(mut self) -> Self {
        self.simplified = false;
        self
    }
}

impl Default for Settings {
    /// 4-a-side: 32x19.2 with a 4m goal and 2.4m centre circle, simplified rules
    fn default() -> Self {
        Self::with_pitch(true, 32.0, 19.2, 4.0, 2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reach_distances() {
        let s = Settings::default();
        assert!((s.kickable_distance - 0.61).abs() < 1e-9);
        assert!((s.catchable_distance - 0.81).abs() < 1e-9);
        assert!(s.simplified);
    }

    #[test]
    fn test_full_rules_toggle() {
        let s = Settings::default().with_full_rules();
        assert!(!s.simplified);
        assert_eq!(s.pitch_length, Settings::default().pitch_length);
    }

    #[test]
    fn test_settings_serialization() {
        let s = Settings::eleven_a_side();
        let json = serde_json::to_string(&s).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }
}
