//! Pass evaluation and selection
//!
//! Every teammate is scored twice: as a still target (current position) and
//! as an advanced target (a fixed distance further toward the opponent goal
//! centre). The best of the two families wins; ties go to the advanced pass.

use tracing::debug;

use super::actions::Action;
use super::advancing;
use super::context::DecisionContext;
use super::geometry::{distance, resized, Vec2};

/// Starting score for best-pass searches; any real pass beats it.
const NO_PASS_SCORE: f64 = -1000.0;

/// Outcome of `choose_pass`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassChoice {
    pub target: Vec2,
    pub score: f64,
    /// `None` when there is nobody to pass to and the target is the kicker
    pub receiver: Option<usize>,
    pub advanced: bool,
}

/// Receiver's position pushed `advanced_length` toward the opponent goal centre.
pub fn advanced_position(ctx: &DecisionContext, player: usize) -> Vec2 {
    let pos = ctx.teammates()[player].pos;
    let toward_goal = ctx.pitch.attacking_goal_center() - pos;
    pos + resized(toward_goal, ctx.config.pass.advanced_length)
}

/// Desirability of passing to `player`, higher is better.
pub fn evaluate_pass(ctx: &DecisionContext, player: usize, advanced: bool) -> f64 {
    let cfg = &ctx.config.pass;
    let ball = ctx.ball();
    let target = if advanced {
        advanced_position(ctx, player)
    } else {
        ctx.teammates()[player].pos
    };

    let mut value = 0.0;

    if advanced {
        value += cfg.advanced_bonus;
    }

    let clearance = ctx.min_opponent_segment_distance(target, ball);
    if clearance <= ctx.settings.ball_radius + ctx.settings.player_radius {
        value += cfg.occluded_penalty;
    }

    if player == 0 {
        value += cfg.goalkeeper_penalty;
    }

    if target.x < ball.x {
        value += cfg.backward_penalty;
    }

    value += (cfg.favourite_distance - distance(ball, target)).abs() * cfg.distance_weight;

    let mut angle = ctx.ball_angle_toward(target);
    if ctx.is_out_of_kick_cone(angle) {
        value += cfg.out_of_angle_penalty;
        angle = ctx.best_kick_angle(angle);
    }
    value += ctx.own_goal_risk(angle);

    value
}

/// Best still or advanced pass among teammates other than the kicker.
///
/// With no teammate at all, the target is the kicker's own position and the
/// score stays at the search floor.
pub fn choose_pass(ctx: &DecisionContext) -> PassChoice {
    let mut best_still: Option<(usize, f64)> = None;
    let mut best_advanced: Option<(usize, f64)> = None;

    for player in (0..ctx.teammates().len()).filter(|&i| i != ctx.shirt) {
        let still = evaluate_pass(ctx, player, false);
        if best_still.map_or(NO_PASS_SCORE, |(_, s)| s) < still {
            best_still = Some((player, still));
        }

        let advanced = evaluate_pass(ctx, player, true);
        if best_advanced.map_or(NO_PASS_SCORE, |(_, s)| s) < advanced {
            best_advanced = Some((player, advanced));
        }
    }

    let Some((still_player, still_score)) = best_still else {
        return PassChoice {
            target: ctx.me().pos,
            score: NO_PASS_SCORE,
            receiver: None,
            advanced: false,
        };
    };

    match best_advanced {
        Some((adv_player, adv_score)) if adv_score >= still_score => PassChoice {
            target: advanced_position(ctx, adv_player),
            score: adv_score,
            receiver: Some(adv_player),
            advanced: true,
        },
        _ => PassChoice {
            target: ctx.teammates()[still_player].pos,
            score: still_score,
            receiver: Some(still_player),
            advanced: false,
        },
    }
}

/// Kick toward `target` at full power, clamped to the feasible cone.
pub fn kick_toward(ctx: &DecisionContext, target: Vec2) -> Action {
    let angle = ctx.best_kick_angle(ctx.ball_angle_toward(target));
    Action::kick(angle, ctx.settings.max_kick_power)
}

/// Pass when a good enough pass exists, dribble otherwise.
pub fn pass_or_dribble(ctx: &DecisionContext) -> Action {
    let choice = choose_pass(ctx);
    if choice.score > ctx.config.pass.minimum_pass_value {
        debug!(
            shirt = ctx.shirt,
            receiver = ?choice.receiver,
            score = choice.score,
            advanced = choice.advanced,
            "pass"
        );
        kick_toward(ctx, choice.target)
    } else {
        debug!(shirt = ctx.shirt, best_pass = choice.score, "dribble");
        advancing::choose_dribble(ctx)
    }
}

/// Restart kick (throw-in) to the best pass target.
pub fn best_throw_in(ctx: &DecisionContext) -> Action {
    kick_toward(ctx, choose_pass(ctx).target)
}

/// Corner kick to the best pass target.
pub fn best_corner_kick(ctx: &DecisionContext) -> Action {
    // same target search as a throw-in for now
    best_throw_in(ctx)
}
