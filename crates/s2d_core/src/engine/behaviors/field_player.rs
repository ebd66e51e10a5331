//! Open-play logic for field players

use std::f64::consts::{PI, TAU};

use rand::{Rng, RngCore};
use tracing::debug;

use super::goalkeeper;
use super::traits::RoleBehavior;
use crate::engine::actions::Action;
use crate::engine::context::DecisionContext;
use crate::engine::geometry::{distance, resized, Vec2};
use crate::engine::marking_manager::{MarkAssignment, MarkingPlan};
use crate::engine::match_state::MatchState;
use crate::engine::passing;

pub struct FieldPlayerBehavior;

impl RoleBehavior for FieldPlayerBehavior {
    fn name(&self) -> &'static str {
        "field_player"
    }

    fn decide(&self, ctx: &DecisionContext, rng: &mut dyn RngCore) -> Action {
        play(ctx, rng)
    }
}

/// Field player in open play.
///
/// 1. ball kickable: restart follow-up, shot, or pass / dribble
/// 2. closest to the ball: chase it
/// 3. off the pitch: run back in
/// 4. otherwise: take position
pub fn play(ctx: &DecisionContext, rng: &mut dyn RngCore) -> Action {
    if ctx.is_ball_kickable() {
        return with_ball(ctx);
    }

    if ctx.my_player_closest_to_ball() == ctx.shirt {
        debug!(shirt = ctx.shirt, "chasing ball");
        return Action::dash(ctx.angle_toward_ball(), ctx.settings.max_dash_power);
    }

    if let Some(angle) = reentry_direction(ctx) {
        debug!(shirt = ctx.shirt, angle, "back onto the pitch");
        return Action::dash(angle, ctx.settings.max_dash_power);
    }

    if ctx.is_goalkeeper() {
        goalkeeper::position(ctx)
    } else {
        position(ctx, rng)
    }
}

fn with_ball(ctx: &DecisionContext) -> Action {
    match ctx.memory.prev_state {
        MatchState::Throwin1 => passing::best_throw_in(ctx),
        MatchState::Corner1up | MatchState::Corner1down => passing::best_corner_kick(ctx),
        _ => {
            let goal_dist = distance(ctx.ball(), ctx.pitch.attacking_goal_center());
            if goal_dist <= ctx.config.positioning.score_distance {
                attack_kick(ctx)
            } else {
                passing::pass_or_dribble(ctx)
            }
        }
    }
}

/// Shoot at the spot of the goal mouth with the widest opponent clearance.
pub fn attack_kick(ctx: &DecisionContext) -> Action {
    let pitch = ctx.pitch;
    let ball = ctx.ball();
    let intervals = ctx.config.positioning.attack_intervals.max(1);

    let mut best_y = 0.0;
    let mut best_value = 0.0;
    for i in 0..=intervals {
        let t = i as f64 / intervals as f64;
        let y = pitch.y_goal1 * t + pitch.y_goal2 * (1.0 - t);
        let clearance = ctx.min_opponent_segment_distance(ball, Vec2::new(pitch.x1, y));
        if clearance > best_value {
            best_value = clearance;
            best_y = y;
        }
    }

    debug!(shirt = ctx.shirt, target_y = best_y, clearance = best_value, "shot");
    passing::kick_toward(ctx, Vec2::new(pitch.x1, best_y))
}

/// Direction back onto the pitch, `None` when inside.
pub fn reentry_direction(ctx: &DecisionContext) -> Option<f64> {
    let pos = ctx.me().pos;
    let pitch = ctx.pitch;

    if pos.x > pitch.x1 {
        Some(if pos.y < pitch.y2 {
            PI * 0.75
        } else if pos.y > pitch.y1 {
            PI * 1.25
        } else {
            PI
        })
    } else if pos.x < pitch.x2 {
        Some(if pos.y < pitch.y2 {
            PI * 0.25
        } else if pos.y > pitch.y1 {
            PI * 1.75
        } else {
            0.0
        })
    } else if pos.y > pitch.y1 {
        Some(PI * 1.5)
    } else if pos.y < pitch.y2 {
        Some(PI * 0.5)
    } else {
        None
    }
}

/// Off-ball positioning.
///
/// When the opponents have the ball and are pressing (ball deep in our half or
/// their field players gathered near our goal), mark; otherwise fall back
/// toward our nearer post. With the ball ours, run forward up to a line, then drift at random.
pub fn position(ctx: &DecisionContext, rng: &mut dyn RngCore) -> Action {
    let pitch = ctx.pitch;
    let cfg = &ctx.config.positioning;
    let max_dash = ctx.settings.max_dash_power;
    let pos = ctx.me().pos;

    if ctx.is_opponent_closer_to_ball() {
        if opponents_pressing(ctx) {
            return mark(ctx);
        }
        return Action::dash(ctx.angle_toward(own_post_target(ctx)), max_dash);
    }

    if pos.x < pitch.x1 * cfg.run_forward_ratio {
        let post = if pos.y > 0.0 { pitch.y_goal1 } else { pitch.y_goal2 };
        return Action::dash(ctx.angle_toward(Vec2::new(pitch.x1, post)), max_dash);
    }

    let angle = rng.gen::<f64>() * TAU;
    debug!(shirt = ctx.shirt, angle, "drifting");
    Action::dash(angle, max_dash)
}

/// Ball deep in our half, or opponent field players gathered near our goal.
fn opponents_pressing(ctx: &DecisionContext) -> bool {
    let pitch = ctx.pitch;
    let cfg = &ctx.config.positioning;
    if ctx.ball().x < pitch.x2 * cfg.go_back_ratio {
        return true;
    }
    match ctx.opponent_centroid() {
        Some(c) => distance(c, pitch.own_goal_center()) < pitch.x2.abs() * cfg.centroid_ratio,
        None => true,
    }
}

fn own_post_target(ctx: &DecisionContext) -> Vec2 {
    let pitch = ctx.pitch;
    let y = if ctx.me().pos.y > 0.0 {
        pitch.y_goal1
    } else {
        pitch.y_goal2
    };
    Vec2::new(pitch.x2, y)
}

fn mark(ctx: &DecisionContext) -> Action {
    let max_dash = ctx.settings.max_dash_power;
    let plan = MarkingPlan::assign(ctx.teammates(), ctx.opponents(), ctx.ball());

    match plan.get(ctx.shirt) {
        MarkAssignment::Busy => Action::dash(ctx.angle_toward_ball(), max_dash),
        MarkAssignment::Marking(opponent) => {
            let target = ctx.opponents()[opponent].pos;
            let goal_side = resized(
                ctx.pitch.own_goal_center() - target,
                ctx.config.positioning.mark_distance,
            );
            debug!(shirt = ctx.shirt, opponent, "marking");
            Action::dash(ctx.angle_toward(target + goal_side), max_dash)
        }
        MarkAssignment::Unassigned => Action::dash(ctx.angle_toward(own_post_target(ctx)), max_dash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::actions::ActionKind;
    use crate::engine::geometry::angle_to;
    use crate::engine::test_fixtures::Fixture;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_out_of_bounds_right_between_posts() {
        let fx = Fixture::new()
            .ball(0.0, 0.0)
            .ours(&[(-15.0, 0.0), (-1.0, 0.0), (17.0, 0.5)])
            .theirs(&[(15.0, 0.0), (3.0, 0.0)]);
        let action = play(&fx.ctx(2), &mut rng());
        assert!(action.is(ActionKind::Dash));
        assert_eq!(action.data[0], PI);
        assert_eq!(action.data[1], fx.settings.max_dash_power);
    }

    #[test]
    fn test_reentry_corners_and_sides() {
        let cases = [
            ((17.0, -10.0), PI * 0.75),
            ((17.0, 10.0), PI * 1.25),
            ((-17.0, -10.0), PI * 0.25),
            ((-17.0, 10.0), PI * 1.75),
            ((-17.0, 0.0), 0.0),
            ((0.0, 10.0), PI * 1.5),
            ((0.0, -10.0), PI * 0.5),
        ];
        for ((x, y), expected) in cases {
            let fx = Fixture::new().ours(&[(-15.0, 0.0), (x, y)]);
            assert_eq!(reentry_direction(&fx.ctx(1)), Some(expected), "at ({x}, {y})");
        }
        let fx = Fixture::new().ours(&[(-15.0, 0.0), (3.0, 3.0)]);
        assert_eq!(reentry_direction(&fx.ctx(1)), None);
    }

    #[test]
    fn test_closest_player_chases_ball() {
        let fx = Fixture::new()
            .ball(4.0, 3.0)
            .ours(&[(-15.0, 0.0), (0.0, 0.0), (-6.0, 0.0)]);
        let action = play(&fx.ctx(1), &mut rng());
        assert!(action.is(ActionKind::Dash));
        assert!((action.data[0] - 3.0f64.atan2(4.0)).abs() < 1e-12);
    }

    #[test]
    fn test_shoots_when_close_to_goal() {
        // goalkeeper guards the lower half of the mouth
        let fx = Fixture::new()
            .ball(11.0, 0.0)
            .ours(&[(-15.0, 0.0), (10.7, 0.0)])
            .theirs(&[(15.5, -1.0)]);
        let action = play(&fx.ctx(1), &mut rng());
        assert!(action.is(ActionKind::Kick));
        assert_eq!(action.data[1], fx.settings.max_kick_power);
        // aims at the top post, away from the keeper
        let expected = angle_to(Vec2::new(11.0, 0.0), Vec2::new(16.0, 2.0));
        assert!((action.data[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_throw_in_follow_up_kicks_full_power() {
        let fx = Fixture::new()
            .ball(0.0, -9.5)
            .ours(&[(-15.0, 0.0), (0.0, -9.9), (5.0, -4.0)])
            .prev_state(MatchState::Throwin1);
        let action = play(&fx.ctx(1), &mut rng());
        assert!(action.is(ActionKind::Kick));
        assert_eq!(action.data[1], fx.settings.max_kick_power);
    }

    #[test]
    fn test_runs_forward_when_team_has_ball() {
        let fx = Fixture::new()
            .ball(0.0, 0.0)
            .ours(&[(-15.0, 0.0), (0.5, 0.0), (-4.0, 2.0)])
            .theirs(&[(15.0, 0.0), (6.0, 0.0)]);
        let action = play(&fx.ctx(2), &mut rng());
        let expected = angle_to(Vec2::new(-4.0, 2.0), Vec2::new(16.0, fx.pitch.y_goal1));
        assert!(action.is(ActionKind::Dash));
        assert!((action.data[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_random_drift_is_seeded() {
        let fx = Fixture::new()
            .ball(0.0, 0.0)
            .ours(&[(-15.0, 0.0), (0.5, 0.0), (12.0, 2.0)])
            .theirs(&[(15.0, 0.0), (6.0, 0.0)]);
        let a = play(&fx.ctx(2), &mut rng());
        let b = play(&fx.ctx(2), &mut rng());
        assert!(a.is(ActionKind::Dash));
        assert_eq!(a, b);
        assert!((0.0..TAU).contains(&a.data[0]));
    }

    #[test]
    fn test_marks_goal_side_of_opponent() {
        // opponents on the ball deep in our half
        let fx = Fixture::new()
            .ball(-10.0, 0.0)
            .ours(&[(-15.0, 0.0), (-5.0, 0.0), (-6.0, 5.0)])
            .theirs(&[(15.0, 0.0), (-9.5, 0.0), (-4.0, 5.0)]);
        let action = play(&fx.ctx(2), &mut rng());
        let opp = Vec2::new(-4.0, 5.0);
        let target = opp + resized(Vec2::new(-16.0, 0.0) - opp, 1.0);
        let expected = angle_to(Vec2::new(-6.0, 5.0), target);
        assert!(action.is(ActionKind::Dash));
        assert!((action.data[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unassigned_falls_back_to_own_post() {
        // nobody left to mark: the second free defender heads for the nearer post
        let fx = Fixture::new()
            .ball(-10.0, 0.0)
            .ours(&[(-15.0, 0.0), (-5.0, 0.0), (-6.0, -5.0)])
            .theirs(&[(15.0, 0.0), (-9.5, 0.0)]);
        let action = play(&fx.ctx(2), &mut rng());
        let expected = angle_to(Vec2::new(-6.0, -5.0), Vec2::new(-16.0, fx.pitch.y_goal2));
        assert!((action.data[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_falls_back_to_post_when_not_pressed() {
        // opponents on the ball in midfield, their players far from our goal
        let fx = Fixture::new()
            .ball(2.0, 0.0)
            .ours(&[(-15.0, 0.0), (-3.0, 0.0), (-5.0, 3.0)])
            .theirs(&[(15.0, 0.0), (3.0, 0.0), (8.0, -2.0)]);
        let ctx = fx.ctx(2);
        assert!(ctx.is_opponent_closer_to_ball());
        assert!(!opponents_pressing(&ctx));

        let action = play(&ctx, &mut rng());
        let expected = angle_to(Vec2::new(-5.0, 3.0), Vec2::new(-16.0, fx.pitch.y_goal1));
        assert!((action.data[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_marks_when_opponents_crowd_our_goal() {
        // ball in midfield, but their field players stand around our goal
        let fx = Fixture::new()
            .ball(-7.5, 0.0)
            .ours(&[(-15.5, 0.0), (-1.5, 0.0), (-12.0, 5.0)])
            .theirs(&[(15.0, 0.0), (-13.0, 0.0), (-14.0, 2.0)]);
        let ctx = fx.ctx(2);
        assert!(ctx.is_opponent_closer_to_ball());
        assert!(opponents_pressing(&ctx));

        let action = play(&ctx, &mut rng());
        let opp = Vec2::new(-14.0, 2.0);
        let target = opp + resized(Vec2::new(-16.0, 0.0) - opp, 1.0);
        let expected = angle_to(Vec2::new(-12.0, 5.0), target);
        assert!(action.is(ActionKind::Dash));
        assert!((action.data[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pressing_without_opponent_field_players() {
        let fx = Fixture::new()
            .ball(0.0, 0.0)
            .ours(&[(-15.0, 0.0), (1.0, 0.0)])
            .theirs(&[(15.0, 0.0)]);
        assert!(opponents_pressing(&fx.ctx(1)));
    }
}
