//! Restart formations (kickoff, goal kick, corner, throw-in)
//!
//! Pure placement formulas in the canonical frame: each shirt maps to a fixed
//! or ball-relative spot. Only our own restarts move anybody besides the
//! kickoff formations; opponent restarts leave players where they are.

use tracing::debug;

use super::actions::Action;
use super::constants::tolerance::EPSILON;
use super::context::DecisionContext;
use super::geometry::Vec2;
use super::pitch::PitchGeometry;
use super::settings::Settings;

/// Distance the restart taker keeps from the ball's spot.
#[inline]
pub fn restart_clearance(settings: &Settings) -> f64 {
    settings.kick_radius / 10.0 + settings.player_radius + settings.ball_radius
}

// ============================================================================
// Kickoff
// ============================================================================

/// Kickoff spot for `shirt`; `own` when we kick off.
pub fn kickoff_target(shirt: usize, own: bool, settings: &Settings, pitch: &PitchGeometry) -> Vec2 {
    match (shirt, own) {
        (0, _) => Vec2::new((pitch.x2 + pitch.area_lx) / 2.0, 0.0),
        (1, true) => Vec2::new(-settings.ball_radius - settings.player_radius - EPSILON, 0.0),
        (1, false) => Vec2::new(-settings.center_radius - settings.player_radius - EPSILON, 0.0),
        (2, true) => Vec2::new(-settings.ball_radius, settings.center_radius),
        (2, false) => Vec2::new(pitch.x2 / 2.0, pitch.y2 / 2.0),
        (3, true) => Vec2::new(-pitch.x1 / 3.0, -settings.center_radius),
        (3, false) => Vec2::new(pitch.x2 / 2.0, -pitch.y2 / 2.0),
        (n, _) => Vec2::new(
            -pitch.x1 + pitch.x1 / (n - 1) as f64,
            settings.center_radius * ((n % 3) as f64 - 1.0),
        ),
    }
}

pub fn kickoff(ctx: &DecisionContext, own: bool) -> Action {
    let target = kickoff_target(ctx.shirt, own, ctx.settings, ctx.pitch);
    debug!(shirt = ctx.shirt, own, x = target.x, y = target.y, "kickoff formation");
    Action::move_to(target.x, target.y)
}

// ============================================================================
// Goal kick
// ============================================================================

/// Our goal kick: the goalkeeper steps behind the ball, the rest stay.
pub fn goal_kick(ctx: &DecisionContext, up: bool) -> Action {
    if !ctx.is_goalkeeper() {
        return Action::no_op();
    }
    let pitch = ctx.pitch;
    let x = pitch.goal_kick_lx - restart_clearance(ctx.settings);
    let y = if up { pitch.goal_kick_uy } else { pitch.goal_kick_dy };
    Action::move_to(x, y)
}

// ============================================================================
// Corner / throw-in
// ============================================================================

/// Our corner: the player closest to the ball goes just outside the corner.
pub fn corner(ctx: &DecisionContext, up: bool) -> Action {
    if ctx.my_player_closest_to_ball() != ctx.shirt {
        return Action::no_op();
    }
    let pitch = ctx.pitch;
    let d = restart_clearance(ctx.settings);
    let y = if up { pitch.y1 + d } else { pitch.y2 - d };
    Action::move_to(pitch.x1, y)
}

/// Our throw-in: the player closest to the ball stands beyond it, off the pitch.
pub fn throw_in(ctx: &DecisionContext) -> Action {
    if ctx.my_player_closest_to_ball() != ctx.shirt {
        return Action::no_op();
    }
    let ball = ctx.ball();
    let mut d = restart_clearance(ctx.settings);
    if ball.y < 0.0 {
        d = -d;
    }
    Action::move_to(ball.x, ball.y + d)
}
