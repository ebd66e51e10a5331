//! Host-controlled agent
//!
//! The host (a keyboard handler, a replay, a test) queues one command at a
//! time in the real frame. The command is played once, then the agent stands
//! still until the next one arrives.

use tracing::debug;

use super::{Agent, TeamId};
use crate::engine::actions::Action;
use crate::engine::match_state::GameState;

#[derive(Debug, Clone)]
pub struct ManualAgent {
    team: TeamId,
    shirt: usize,
    pending: Option<Action>,
}

impl ManualAgent {
    pub fn new(team: TeamId, shirt: usize) -> Self {
        Self {
            team,
            shirt,
            pending: None,
        }
    }

    /// Queue the next action, replacing any command not yet played.
    pub fn command(&mut self, action: Action) {
        if self.pending.is_some() {
            debug!(shirt = self.shirt, "dropping unplayed command");
        }
        self.pending = Some(action);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Agent for ManualAgent {
    fn step(&mut self, _state: &GameState) -> Action {
        self.pending.take().unwrap_or_default()
    }

    fn team(&self) -> TeamId {
        self.team
    }

    fn shirt(&self) -> usize {
        self.shirt
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_command_once() {
        let state = GameState::default();
        let mut agent = ManualAgent::new(TeamId::Second, 1);
        assert_eq!(agent.step(&state), Action::no_op());

        agent.command(Action::dash(1.0, 0.5));
        assert!(agent.has_pending());
        assert_eq!(agent.step(&state), Action::dash(1.0, 0.5));
        assert_eq!(agent.step(&state), Action::no_op());
    }

    #[test]
    fn test_latest_command_wins() {
        let state = GameState::default();
        let mut agent = ManualAgent::new(TeamId::First, 0);
        agent.command(Action::turn(0.5));
        agent.command(Action::catch());
        assert_eq!(agent.step(&state), Action::catch());
        assert!(!agent.has_pending());
    }

    #[test]
    fn test_commands_are_not_mirrored() {
        let mut state = GameState::default();
        state.env.halftime_passed = true;
        let mut agent = ManualAgent::new(TeamId::First, 2);
        agent.command(Action::kick(0.25, 0.65));
        assert_eq!(agent.step(&state), Action::kick(0.25, 0.65));
    }
}
