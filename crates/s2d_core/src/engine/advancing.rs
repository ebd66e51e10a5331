//! Dribble direction planning
//!
//! Samples a fan of directions across the kickable cone around the player's
//! facing, projects a short segment from the ball along each one and keeps the
//! best scoring direction.

use tracing::trace;

use super::actions::Action;
use super::context::DecisionContext;
use super::geometry::{distance, unit};

/// Grows linearly past `half_width * ratio` on either touchline, reaching 1
/// on the line itself.
fn touchline_penalty(half_width: f64, ratio: f64, y: f64) -> f64 {
    let border = half_width * ratio;
    if y.abs() <= border {
        return 0.0;
    }
    (y.abs() - border) / (half_width * (1.0 - ratio))
}

/// Score of dribbling the ball along `angle`, higher is better.
pub fn score_dribble(ctx: &DecisionContext, angle: f64) -> f64 {
    let cfg = &ctx.config.advance;
    let pitch = ctx.pitch;
    let ball = ctx.ball();
    let target = ball + unit(angle) * cfg.checked_distance;

    let mut value = ctx.min_opponent_segment_distance(ball, target);

    if target.x > ball.x {
        value += cfg.advancing_incentive;
    }

    value -= touchline_penalty(pitch.y1, cfg.danger_border_ratio, target.y);

    let closeness = cfg.goal_incentive / (1.0 + distance(pitch.attacking_goal_center(), target));
    value += closeness * closeness;

    value += ctx.own_goal_risk(angle);

    value
}

/// Kick the ball ahead along the best sampled direction at half power.
///
/// Samples run from `facing + kickable_angle` down to `facing - kickable_angle`.
/// Nothing scoring above zero leaves the direction at 0.
pub fn choose_dribble(ctx: &DecisionContext) -> Action {
    let cfg = &ctx.config.advance;
    let facing = ctx.me().direction;
    let low = facing - ctx.settings.kickable_angle;
    let high = facing + ctx.settings.kickable_angle;
    let intervals = cfg.intervals.max(1);

    let mut best_value = 0.0;
    let mut best_angle = 0.0;
    for i in 0..=intervals {
        let t = i as f64 / intervals as f64;
        let angle = low * t + high * (1.0 - t);
        let value = score_dribble(ctx, angle);
        trace!(shirt = ctx.shirt, angle, value, "dribble sample");
        if value > best_value {
            best_value = value;
            best_angle = angle;
        }
    }

    Action::kick(
        ctx.best_kick_angle(best_angle),
        ctx.settings.max_kick_power / 2.0,
    )
}
