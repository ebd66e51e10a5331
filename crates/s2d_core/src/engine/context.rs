//! Per-tick decision context
//!
//! Bundles the canonical environment with settings, pitch, tuning and the
//! agent's memory, and answers the perception queries every behaviour needs.
//! All queries are pure reads; nothing here mutates the snapshot.
//!
//! Callers guarantee `shirt < env.teams[0].len()` before building a context.

use std::f64::consts::{FRAC_PI_2, PI};

use super::config::AgentConfig;
use super::geometry::{
    angle_to, distance, distance_squared, facing_cosine, normalize_positive, normalize_signed,
    point_segment_distance, Vec2,
};
use super::match_state::{Environment, PlayerInfo};
use super::memory::AgentMemory;
use super::pitch::PitchGeometry;
use super::settings::Settings;

/// Initial value for minimum opponent clearance searches
const FAR_CLEARANCE: f64 = 1000.0;
/// Initial value for squared-distance minimum searches
const FAR_SQUARED: f64 = 1_000_000.0;

/// Field player of `team` closest to `target`, goalkeeper excluded.
///
/// Returns 0 when the team has no field players. Ties keep the lowest shirt.
pub fn closest_field_player(team: &[PlayerInfo], target: Vec2) -> usize {
    if team.len() < 2 {
        return 0;
    }
    let mut closest = 1;
    let mut min_dist = distance_squared(team[1].pos, target);
    for (i, player) in team.iter().enumerate().skip(2) {
        let d = distance_squared(player.pos, target);
        if d < min_dist {
            closest = i;
            min_dist = d;
        }
    }
    closest
}

pub struct DecisionContext<'a> {
    /// Canonical frame: `teams[0]` is ours, we attack `x1`
    pub env: &'a Environment,
    pub settings: &'a Settings,
    pub pitch: &'a PitchGeometry,
    pub config: &'a AgentConfig,
    pub memory: &'a AgentMemory,
    pub shirt: usize,
    pub cos_kickable_angle: f64,
    pub cos_catchable_angle: f64,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        env: &'a Environment,
        settings: &'a Settings,
        pitch: &'a PitchGeometry,
        config: &'a AgentConfig,
        memory: &'a AgentMemory,
        shirt: usize,
    ) -> Self {
        Self {
            env,
            settings,
            pitch,
            config,
            memory,
            shirt,
            cos_kickable_angle: settings.kickable_angle.cos(),
            cos_catchable_angle: settings.catchable_angle.cos(),
        }
    }

    // ========== Bodies ==========

    #[inline]
    pub fn me(&self) -> &PlayerInfo {
        &self.env.teams[0][self.shirt]
    }

    #[inline]
    pub fn teammates(&self) -> &[PlayerInfo] {
        &self.env.teams[0]
    }

    #[inline]
    pub fn opponents(&self) -> &[PlayerInfo] {
        &self.env.teams[1]
    }

    #[inline]
    pub fn ball(&self) -> Vec2 {
        self.env.ball.pos
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.shirt == 0
    }

    // ========== Angles ==========

    /// Direction from this player to `target`
    #[inline]
    pub fn angle_toward(&self, target: Vec2) -> f64 {
        angle_to(self.me().pos, target)
    }

    #[inline]
    pub fn angle_toward_ball(&self) -> f64 {
        self.angle_toward(self.ball())
    }

    /// Direction from the ball to `target`
    #[inline]
    pub fn ball_angle_toward(&self, target: Vec2) -> f64 {
        angle_to(self.ball(), target)
    }

    // ========== Proximity ==========

    /// Field player of `team` closest to the ball, see [`closest_field_player`].
    #[inline]
    pub fn closest_to_ball(&self, team: &[PlayerInfo]) -> usize {
        closest_field_player(team, self.ball())
    }

    pub fn my_player_closest_to_ball(&self) -> usize {
        self.closest_to_ball(self.teammates())
    }

    pub fn opponent_closest_to_ball(&self) -> usize {
        self.closest_to_ball(self.opponents())
    }

    /// An opponent field player is nearer the ball than any of ours.
    ///
    /// Ties go to us; goalkeepers are ignored.
    pub fn is_opponent_closer_to_ball(&self) -> bool {
        let ball = self.ball();
        let mut closer_team = 0;
        let mut min_dist = FAR_SQUARED;
        for (team_idx, team) in self.env.teams.iter().enumerate() {
            for player in team.iter().skip(1) {
                let d = distance_squared(player.pos, ball);
                if d < min_dist {
                    closer_team = team_idx;
                    min_dist = d;
                }
            }
        }
        closer_team == 1
    }

    /// Mean position of opponent field players, `None` without any.
    pub fn opponent_centroid(&self) -> Option<Vec2> {
        let field = self.opponents().get(1..)?;
        if field.is_empty() {
            return None;
        }
        let sum = field.iter().fold(Vec2::zeros(), |acc, p| acc + p.pos);
        Some(sum / field.len() as f64)
    }

    /// Smallest distance from any opponent (goalkeeper included) to the segment.
    pub fn min_opponent_segment_distance(&self, s1: Vec2, s2: Vec2) -> f64 {
        self.opponents()
            .iter()
            .map(|p| point_segment_distance(p.pos, s1, s2))
            .fold(FAR_CLEARANCE, f64::min)
    }

    // ========== Kicking ==========

    /// Our own restart was in progress on the previous tick.
    #[inline]
    pub fn is_team_resume_kicking(&self) -> bool {
        self.memory.is_team_resume_kicking()
    }

    /// Facing cones only apply with full rules outside our own restarts.
    #[inline]
    fn cones_apply(&self) -> bool {
        !self.settings.simplified && !self.is_team_resume_kicking()
    }

    pub fn is_ball_kickable(&self) -> bool {
        let me = self.me();
        let delta = self.ball() - me.pos;
        let dist = delta.norm();
        if dist > self.settings.kickable_distance {
            return false;
        }
        if self.cones_apply() && dist > f64::EPSILON {
            return facing_cosine(delta, me.direction) > self.cos_kickable_angle;
        }
        true
    }

    /// Signed offset of a kick direction from the player's facing.
    fn kick_offset(&self, angle: f64) -> f64 {
        normalize_signed(normalize_positive(angle) - self.me().direction)
    }

    /// Kick direction outside the kickable-direction cone.
    pub fn is_out_of_kick_cone(&self, angle: f64) -> bool {
        if !self.cones_apply() {
            return false;
        }
        self.kick_offset(angle).abs() > self.settings.kickable_direction_angle
    }

    /// Clamp a kick direction into the feasible cone around the facing.
    pub fn best_kick_angle(&self, angle: f64) -> f64 {
        if !self.cones_apply() {
            return angle;
        }
        let facing = self.me().direction;
        let limit = self.settings.kickable_direction_angle;
        let offset = self.kick_offset(angle);
        if offset > limit {
            facing + limit
        } else if offset < -limit {
            facing - limit
        } else {
            angle
        }
    }

    /// Where a kick from the ball along `angle` crosses our goal line, if it
    /// passes between the posts.
    pub fn own_goal_crossing(&self, angle: f64) -> Option<Vec2> {
        let a = normalize_positive(angle);
        if !(FRAC_PI_2..=1.5 * PI).contains(&a) {
            return None;
        }
        let (sin, cos) = a.sin_cos();
        if cos == 0.0 {
            return None;
        }
        let ball = self.ball();
        let y = ball.y + (self.pitch.x2 - ball.x) * sin / cos;
        if y < self.pitch.y_goal1 && y > self.pitch.y_goal2 {
            Some(Vec2::new(self.pitch.x2, y))
        } else {
            None
        }
    }

    /// Penalty for a kick heading into our goal close to the ball.
    ///
    /// Fades linearly from `own_goal_penalty` at zero distance to 0 at
    /// `own_goal_threshold`.
    pub fn own_goal_risk(&self, angle: f64) -> f64 {
        let pass = &self.config.pass;
        match self.own_goal_crossing(angle) {
            Some(crossing) => {
                let d = distance(self.ball(), crossing);
                if d < pass.own_goal_threshold {
                    (pass.own_goal_threshold - d) * pass.own_goal_penalty / pass.own_goal_threshold
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::match_state::{BallInfo, MatchState};
    use crate::engine::test_fixtures::Fixture;

    #[test]
    fn test_closest_to_ball_skips_goalkeeper() {
        let fx = Fixture::new()
            .ball(0.0, 0.0)
            .ours(&[(0.1, 0.0), (5.0, 0.0), (2.0, 1.0)])
            .theirs(&[(14.0, 0.0)]);
        let ctx = fx.ctx(1);
        assert_eq!(ctx.my_player_closest_to_ball(), 2);
        // opponents with only a goalkeeper
        assert_eq!(ctx.opponent_closest_to_ball(), 0);
    }

    #[test]
    fn test_closest_to_ball_ties_keep_lowest_index() {
        let fx = Fixture::new()
            .ball(0.0, 0.0)
            .ours(&[(-14.0, 0.0), (3.0, 0.0), (-3.0, 0.0)]);
        assert_eq!(fx.ctx(1).my_player_closest_to_ball(), 1);
    }

    #[test]
    fn test_opponent_closer_ignores_goalkeepers() {
        let fx = Fixture::new()
            .ball(10.0, 0.0)
            .ours(&[(10.0, 0.0), (0.0, 0.0)])
            .theirs(&[(10.0, 0.1), (6.0, 0.0)]);
        assert!(fx.ctx(1).is_opponent_closer_to_ball());

        let fx = fx.theirs(&[(10.0, 0.1), (-6.0, 0.0)]);
        assert!(!fx.ctx(1).is_opponent_closer_to_ball());
    }

    #[test]
    fn test_opponent_centroid() {
        let fx = Fixture::new().theirs(&[(15.0, 0.0), (2.0, 2.0), (4.0, -2.0)]);
        let c = fx.ctx(0).opponent_centroid().unwrap();
        assert!((c - Vec2::new(3.0, 0.0)).norm() < 1e-12);

        let fx = Fixture::new().theirs(&[(15.0, 0.0)]);
        assert!(fx.ctx(0).opponent_centroid().is_none());
    }

    #[test]
    fn test_min_segment_distance_defaults_far() {
        let fx = Fixture::new().theirs(&[]);
        let d = fx
            .ctx(0)
            .min_opponent_segment_distance(Vec2::zeros(), Vec2::new(1.0, 0.0));
        assert_eq!(d, FAR_CLEARANCE);
    }

    #[test]
    fn test_kickable_respects_cone_with_full_rules() {
        // ball right behind a player facing +x
        let fx = Fixture::new()
            .full_rules()
            .ball(-0.5, 0.0)
            .ours(&[(-14.0, 0.0), (0.0, 0.0)]);
        assert!(!fx.ctx(1).is_ball_kickable());

        // simplified rules ignore facing
        let fx = fx.simplified();
        assert!(fx.ctx(1).is_ball_kickable());

        // own throw-in on the previous tick ignores facing too
        let fx = fx.full_rules().prev_state(MatchState::Throwin1);
        assert!(fx.ctx(1).is_ball_kickable());
    }

    #[test]
    fn test_kickable_distance_bound() {
        let fx = Fixture::new().ball(0.7, 0.0).ours(&[(-14.0, 0.0), (0.0, 0.0)]);
        assert!(!fx.ctx(1).is_ball_kickable());
        let fx = fx.ball(0.6, 0.0);
        assert!(fx.ctx(1).is_ball_kickable());
    }

    #[test]
    fn test_best_kick_angle_clamps_to_cone() {
        let fx = Fixture::new()
            .full_rules()
            .ours(&[(-14.0, 0.0), (0.0, 0.0)]);
        let ctx = fx.ctx(1);
        // facing 0, cone ±π/2: π is out, clamps to +π/2 (offset of π is +π)
        assert!((ctx.best_kick_angle(PI) - FRAC_PI_2).abs() < 1e-12);
        assert!((ctx.best_kick_angle(-2.0) + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(ctx.best_kick_angle(0.3), 0.3);
        assert!(ctx.is_out_of_kick_cone(PI));

        let fx = fx.simplified();
        assert_eq!(fx.ctx(1).best_kick_angle(PI), PI);
    }

    #[test]
    fn test_own_goal_crossing() {
        let mut fx = Fixture::new();
        fx.env.ball = BallInfo::at(-13.0, 0.0);
        let ctx = fx.ctx(0);
        let crossing = ctx.own_goal_crossing(PI).unwrap();
        assert!((crossing - Vec2::new(-16.0, 0.0)).norm() < 1e-9);
        // kicking forward never threatens our goal
        assert!(ctx.own_goal_crossing(0.2).is_none());
        // steep kick misses the mouth
        assert!(ctx.own_goal_crossing(PI - 1.2).is_none());
    }

    #[test]
    fn test_own_goal_risk_is_linear() {
        let mut fx = Fixture::new();
        fx.env.ball = BallInfo::at(-13.0, 0.0);
        // 3m from goal: half of the -15 penalty
        assert!((fx.ctx(0).own_goal_risk(PI) + 7.5).abs() < 1e-9);

        fx.env.ball = BallInfo::at(-5.0, 0.0);
        assert_eq!(fx.ctx(0).own_goal_risk(PI), 0.0);
    }
}
