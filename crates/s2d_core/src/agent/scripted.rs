//! Ball chaser: the simplest scripted opponent
//!
//! Runs at the ball and shoots at the goal centre whenever it can. Useful as
//! a sparring roster and as a smoke test for the frame transform.

use tracing::trace;

use super::{Agent, TeamId};
use crate::engine::actions::Action;
use crate::engine::frame::CanonicalFrame;
use crate::engine::geometry::{angle_to, distance};
use crate::engine::match_state::{GameState, MatchState};
use crate::engine::set_pieces;

#[derive(Debug, Clone)]
pub struct ChaserAgent {
    team: TeamId,
    shirt: usize,
}

impl ChaserAgent {
    pub fn new(team: TeamId, shirt: usize) -> Self {
        Self { team, shirt }
    }
}

impl Agent for ChaserAgent {
    fn step(&mut self, state: &GameState) -> Action {
        let frame = CanonicalFrame::normalize(self.team, &state.env);
        let env = frame.env();
        let Some(me) = env.teams[0].get(self.shirt) else {
            return Action::no_op();
        };
        let settings = &state.settings;
        let pitch = &state.pitch;

        let canonical = match env.state {
            MatchState::Play => {
                let ball = env.ball.pos;
                if distance(me.pos, ball) < settings.kickable_distance {
                    let shot = angle_to(ball, pitch.attacking_goal_center());
                    Action::kick(shot, settings.max_kick_power)
                } else {
                    Action::dash(angle_to(me.pos, ball), settings.max_dash_power)
                }
            }
            MatchState::Kickoff1 | MatchState::Kickoff2 => {
                let own = env.state == MatchState::Kickoff1;
                let spot = set_pieces::kickoff_target(self.shirt, own, settings, pitch);
                Action::move_to(spot.x, spot.y)
            }
            _ => Action::no_op(),
        };

        trace!(shirt = self.shirt, kind = ?canonical.kind, "chaser");
        frame.to_real(canonical)
    }

    fn team(&self) -> TeamId {
        self.team
    }

    fn shirt(&self) -> usize {
        self.shirt
    }

    fn name(&self) -> &'static str {
        "chaser"
    }
}
