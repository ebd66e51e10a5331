//! Pitch geometry derived from `Settings`
//!
//! ## Coordinate System
//! - Origin at the centre spot, symmetric on both axes
//! - x: `x2` (left goal line, negative) .. `x1` (right goal line, positive)
//! - y: `y2` (bottom touchline, negative) .. `y1` (top touchline, positive)
//!
//! In the canonical frame the controlled team defends the `x2` goal and
//! attacks the `x1` goal.

use serde::{Deserialize, Serialize};

use super::constants::regulation;
use super::geometry::Vec2;
use super::settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchGeometry {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    /// Back of the nets
    pub x_goal1: f64,
    pub x_goal2: f64,
    /// Goal mouth (posts)
    pub y_goal1: f64,
    pub y_goal2: f64,
    /// Penalty areas: left area front edge, right area front edge, top, bottom
    pub area_lx: f64,
    pub area_rx: f64,
    pub area_uy: f64,
    pub area_dy: f64,
    /// Goal-kick ball placement references
    pub goal_kick_lx: f64,
    pub goal_kick_rx: f64,
    pub goal_kick_uy: f64,
    pub goal_kick_dy: f64,
    /// Pole centres: left-up, left-down, right-up, right-down
    pub poles: [Vec2; 4],
    pub border_up: f64,
    pub border_down: f64,
    pub border_left: f64,
    pub border_right: f64,
}

impl PitchGeometry {
    pub fn new(
        pitch_width: f64,
        pitch_length: f64,
        goal_width: f64,
        net_length: f64,
        pole_radius: f64,
        border_limit: f64,
    ) -> Self {
        let x1 = pitch_length / 2.0;
        let x2 = -x1;
        let y1 = pitch_width / 2.0;
        let y2 = -y1;
        let y_goal1 = goal_width / 2.0;
        let y_goal2 = -y_goal1;
        let area_lx = x2 + regulation::area_length(pitch_length);
        let area_rx = x1 - regulation::area_length(pitch_length);
        let area_uy = regulation::area_width(pitch_width) / 2.0;
        let area_dy = -area_uy;

        Self {
            x1,
            x2,
            y1,
            y2,
            x_goal1: x1 + net_length,
            x_goal2: -(x1 + net_length),
            y_goal1,
            y_goal2,
            area_lx,
            area_rx,
            area_uy,
            area_dy,
            goal_kick_lx: x2 + (area_lx - x2) / 2.0,
            goal_kick_rx: x1 + (area_rx - x1) / 2.0,
            goal_kick_uy: y_goal1 + (area_uy - y_goal1) / 2.0,
            goal_kick_dy: y_goal2 + (area_dy - y_goal2) / 2.0,
            poles: [
                Vec2::new(x2, y_goal1 + pole_radius),
                Vec2::new(x2, y_goal2 - pole_radius),
                Vec2::new(x1, y_goal1 + pole_radius),
                Vec2::new(x1, y_goal2 - pole_radius),
            ],
            border_up: y1 + border_limit,
            border_down: y2 - border_limit,
            border_left: x2 - border_limit,
            border_right: x1 + border_limit,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.pitch_width,
            settings.pitch_length,
            settings.goal_width,
            settings.net_length,
            settings.pole_radius,
            settings.out_pitch_limit,
        )
    }

    /// Centre of the goal the canonical team attacks
    #[inline]
    pub fn attacking_goal_center(&self) -> Vec2 {
        Vec2::new(self.x1, 0.0)
    }

    /// Centre of the goal the canonical team defends
    #[inline]
    pub fn own_goal_center(&self) -> Vec2 {
        Vec2::new(self.x2, 0.0)
    }

    /// Inside the touchlines and goal lines (boundary included)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x2 && p.x <= self.x1 && p.y >= self.y2 && p.y <= self.y1
    }

    /// Inside the left (canonical own) penalty area
    pub fn in_own_area(&self, p: Vec2) -> bool {
        p.x >= self.x2 && p.x <= self.area_lx && p.y <= self.area_uy && p.y >= self.area_dy
    }
}

impl Default for PitchGeometry {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
