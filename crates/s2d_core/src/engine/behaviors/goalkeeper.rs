//! Goalkeeper logic (shirt 0) in open play

use std::f64::consts::FRAC_PI_2;

use rand::RngCore;
use tracing::debug;

use super::traits::RoleBehavior;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::context::DecisionContext;
use crate::engine::geometry::{distance, facing_cosine, Vec2};
use crate::engine::passing;

pub struct GoalkeeperBehavior;

impl RoleBehavior for GoalkeeperBehavior {
    fn name(&self) -> &'static str {
        "goalkeeper"
    }

    fn decide(&self, ctx: &DecisionContext, _rng: &mut dyn RngCore) -> Action {
        play(ctx)
    }
}

/// Kick if the ball is at the feet, catch if it is reachable inside the
/// area, otherwise take position.
///
/// While holding a caught ball the pass is scored from the ball's current
/// spot inside the keeper, not from where the simulator will place it at the
/// kick, so the target can be slightly off.
pub fn play(ctx: &DecisionContext) -> Action {
    let me = ctx.me();
    let delta = ctx.ball() - me.pos;
    let dist = delta.norm();
    let cos = facing_cosine(delta, me.direction);

    if dist < ctx.settings.kickable_distance && cos >= ctx.cos_kickable_angle {
        debug!("goalkeeper clears");
        return passing::pass_or_dribble(ctx);
    }

    if dist < ctx.settings.catchable_distance
        && ctx.pitch.in_own_area(me.pos)
        && cos >= ctx.cos_catchable_angle
    {
        if ctx.memory.prev_action.is(ActionKind::Kick) {
            // just kicked it: do not grab it back
            return position(ctx);
        }
        debug!(dist, "goalkeeper catches");
        return Action::catch();
    }

    position(ctx)
}

/// Rush a close ball on our half, otherwise stand a third of the way from
/// the goal centre toward the ball and face the ball once there.
pub fn position(ctx: &DecisionContext) -> Action {
    let cfg = &ctx.config.positioning;
    let pitch = ctx.pitch;
    let max_dash = ctx.settings.max_dash_power;
    let me = ctx.me();
    let ball = ctx.ball();

    if distance(me.pos, ball) < cfg.goalkeeper_intervention && me.pos.x < 0.0 {
        return Action::dash(ctx.angle_toward_ball(), max_dash);
    }

    let line = ball - pitch.own_goal_center();
    let wanted = Vec2::new(pitch.x2 + line.x / 3.0, line.y / 3.0);
    let diff = wanted - me.pos;

    if diff.norm() > cfg.goalkeeper_epsilon {
        let angle = if diff.x == 0.0 {
            if diff.y > 0.0 {
                FRAC_PI_2
            } else {
                -FRAC_PI_2
            }
        } else {
            diff.y.atan2(diff.x)
        };
        Action::dash(angle, max_dash)
    } else {
        Action::dash(ctx.angle_toward_ball(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::Fixture;

    /// Keeper inside the area facing +x, ball 0.5m straight ahead.
    ///
    /// The kick branch is checked first, and the default kickable reach (0.61m)
    /// covers 0.5m, so reach is shortened to 0.45m to leave the ball in catch
    /// range only.
    fn catch_fixture() -> Fixture {
        let mut fx = Fixture::new()
            .ball(-14.5, 0.0)
            .ours(&[(-15.0, 0.0), (0.0, 0.0)])
            .theirs(&[(15.0, 0.0), (-12.0, 1.0)]);
        fx.settings.kickable_distance = 0.45;
        fx
    }

    #[test]
    fn test_catches_ball_in_front() {
        let fx = catch_fixture();
        let action = play(&fx.ctx(0));
        assert!(action.is(ActionKind::Catch));
    }

    #[test]
    fn test_default_reach_kicks_before_catching() {
        let fx = Fixture::new()
            .ball(-14.5, 0.0)
            .ours(&[(-15.0, 0.0), (0.0, 0.0)])
            .theirs(&[(15.0, 0.0), (-12.0, 1.0)]);
        assert!(0.5 < fx.settings.kickable_distance);
        let action = play(&fx.ctx(0));
        assert!(action.is(ActionKind::Kick));
    }

    #[test]
    fn test_no_catch_right_after_kick() {
        let fx = catch_fixture().prev_action(Action::kick(0.0, 0.65));
        let action = play(&fx.ctx(0));
        assert!(action.is(ActionKind::Dash));
    }

    #[test]
    fn test_no_catch_outside_area() {
        let fx = catch_fixture()
            .ball(-5.5, 0.0)
            .ours(&[(-6.0, 0.0), (0.0, 0.0)]);
        let action = play(&fx.ctx(0));
        assert!(!action.is(ActionKind::Catch));
    }

    #[test]
    fn test_no_catch_behind_back() {
        let fx = catch_fixture().facing(0, std::f64::consts::PI);
        let action = play(&fx.ctx(0));
        assert!(!action.is(ActionKind::Catch));
    }

    #[test]
    fn test_kicks_ball_at_feet() {
        let fx = Fixture::new()
            .ball(-14.6, 0.0)
            .ours(&[(-15.0, 0.0), (-5.0, 3.0)])
            .theirs(&[(15.0, 0.0)]);
        let action = play(&fx.ctx(0));
        assert!(action.is(ActionKind::Kick));
    }

    #[test]
    fn test_rushes_close_ball_on_own_half() {
        let fx = Fixture::new()
            .ball(-12.0, 1.0)
            .ours(&[(-14.0, 0.0), (0.0, 0.0)]);
        let action = play(&fx.ctx(0));
        assert!(action.is(ActionKind::Dash));
        assert!((action.data[0] - 1.0f64.atan2(2.0)).abs() < 1e-12);
        assert_eq!(action.data[1], fx.settings.max_dash_power);
    }

    #[test]
    fn test_moves_onto_ball_goal_line() {
        // ball at (8, 6): wanted spot is (-16 + 24/3, 6/3) = (-8, 2)
        let fx = Fixture::new()
            .ball(8.0, 6.0)
            .ours(&[(-15.0, 0.0), (0.0, 0.0)]);
        let action = position(&fx.ctx(0));
        assert!((action.data[0] - 2.0f64.atan2(7.0)).abs() < 1e-12);
        assert_eq!(action.data[1], fx.settings.max_dash_power);
    }

    #[test]
    fn test_straight_up_when_wanted_spot_is_above() {
        let fx = Fixture::new()
            .ball(-13.0, 9.0)
            .ours(&[(-15.0, 0.0), (0.0, 0.0)]);
        // wanted (-15, 3): same x, above
        let action = position(&fx.ctx(0));
        assert_eq!(action.data[0], FRAC_PI_2);
    }

    #[test]
    fn test_in_position_faces_ball() {
        let fx = Fixture::new()
            .ball(8.0, 6.0)
            .ours(&[(-8.0, 2.2), (0.0, 0.0)]);
        let action = position(&fx.ctx(0));
        assert!(action.is(ActionKind::Dash));
        assert_eq!(action.data[1], 0.0);
        assert!((action.data[0] - 3.8f64.atan2(16.0)).abs() < 1e-12);
    }
}
