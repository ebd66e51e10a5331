//! Physical constants for the 2D soccer world
//!
//! Default values mirror the simulator that produces the snapshots, so a
//! `Settings::default()` built here matches what the simulator hands out.

// ============================================================
// Numeric tolerances
// ============================================================
pub mod tolerance {
    /// Machine epsilon, used for degenerate-segment detection.
    pub const SMALL_EPSILON: f64 = f64::EPSILON;
    /// Placement slack for formation targets.
    pub const EPSILON: f64 = f64::EPSILON * 10.0;
}

// ============================================================
// Bodies
// ============================================================
pub mod body {
    /// Ball radius (m)
    pub const BALL_RADIUS: f64 = 0.11;
    /// Player radius (m)
    pub const PLAYER_RADIUS: f64 = 0.4;
    /// Extra reach for kicking, on top of player radius (m)
    pub const KICK_RADIUS: f64 = 0.1;
    /// Extra reach for catching, on top of player radius (m)
    pub const CATCH_RADIUS: f64 = 0.3;
    /// Goal post radius (m)
    pub const POLE_RADIUS: f64 = 0.055;
}

// ============================================================
// Reach cones
// ============================================================
pub mod cone {
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Max angle between facing and the player→ball vector to kick
    pub const KICKABLE_ANGLE: f64 = PI / 3.0;
    /// Max angle between facing and the kick direction
    pub const KICKABLE_DIRECTION_ANGLE: f64 = FRAC_PI_2;
    /// Max angle between facing and the goalkeeper→ball vector to catch
    pub const CATCHABLE_ANGLE: f64 = FRAC_PI_2;
}

// ============================================================
// Kinematics (per tick)
// ============================================================
pub mod kinematics {
    pub const PLAYER_VELOCITY_DECAY: f64 = 0.9;
    pub const BALL_VELOCITY_DECAY: f64 = 0.97;
    pub const MAX_PLAYER_SPEED: f64 = 0.2222;
    pub const MAX_BALL_SPEED: f64 = 0.6;
    pub const MAX_DASH_POWER: f64 = 0.06;
    pub const MAX_KICK_POWER: f64 = 0.65;
}

// ============================================================
// Noise and catching
// ============================================================
pub mod noise {
    pub const PLAYER_RANDOM_NOISE: f64 = 0.005;
    pub const PLAYER_DIRECTION_NOISE: f64 = 0.005;
    pub const PLAYER_VELOCITY_DIRECTION_MIX: f64 = 0.2;
    pub const BALL_INSIDE_PLAYER_VELOCITY_DISPLACE: f64 = 0.5;
    pub const CATCH_PROBABILITY: f64 = 0.9;
    pub const AFTER_CATCH_DISTANCE: f64 = 0.05;
    pub const CATCH_HOLDING_TICKS: u32 = 2;
}

// ============================================================
// Regulation pitch (used to scale smaller pitches)
// ============================================================
pub mod regulation {
    pub const PITCH_LENGTH: f64 = 105.0;
    pub const PITCH_WIDTH: f64 = 68.0;
    pub const AREA_LENGTH: f64 = 16.5;
    pub const AREA_WIDTH: f64 = 40.32;
    pub const GOAL_WIDTH: f64 = 7.32;
    pub const CORNER_DISTANCE: f64 = 9.15;
    pub const CENTER_RADIUS: f64 = 9.15;
    /// Minimum opponent distance at corners on small pitches (5-a-side uses 4.0)
    pub const MIN_CORNER_DISTANCE: f64 = 2.5;
    pub const MIN_THROWIN_DISTANCE: f64 = 2.5;
    /// How far a player may leave the pitch before being pushed back (m)
    pub const PLAYER_OUT_OF_PITCH_LIMIT: f64 = 3.0;

    /// Penalty area length scaled to the given pitch length.
    pub fn area_length(pitch_length: f64) -> f64 {
        pitch_length / PITCH_LENGTH * AREA_LENGTH
    }

    /// Penalty area width scaled to the given pitch width.
    pub fn area_width(pitch_width: f64) -> f64 {
        pitch_width / PITCH_WIDTH * AREA_WIDTH
    }

    /// Corner distance scaled to the pitch width, never below the small-pitch minimum.
    pub fn corner_distance(pitch_width: f64) -> f64 {
        (pitch_width / PITCH_WIDTH * CORNER_DISTANCE).max(MIN_CORNER_DISTANCE)
    }
}
