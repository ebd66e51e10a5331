//! State an agent carries from one tick to the next

use serde::{Deserialize, Serialize};

use super::actions::Action;
use super::match_state::MatchState;

/// Owned by exactly one agent; starts at `Inactive` / no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentMemory {
    /// Canonical-frame state seen on the previous tick
    pub prev_state: MatchState,
    /// Real-frame action emitted on the previous tick
    pub prev_action: Action,
}

impl AgentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, state: MatchState, action: Action) {
        self.prev_state = state;
        self.prev_action = action;
    }

    /// Our own restart was in progress on the previous tick.
    pub fn is_team_resume_kicking(&self) -> bool {
        matches!(
            self.prev_state,
            MatchState::Kickoff1
                | MatchState::Goalkick1up
                | MatchState::Goalkick1down
                | MatchState::Throwin1
                | MatchState::Corner1up
                | MatchState::Corner1down
        )
    }
}
