//! Role state machine
//!
//! Picks the behaviour for this tick from the canonical match state and the
//! shirt number. No state persists here: the role is recomputed every tick.
//!
//! | canonical state                                   | shirt 0     | others       |
//! |---------------------------------------------------|-------------|--------------|
//! | Play                                              | Goalkeeper  | FieldPlayer  |
//! | Kickoff1/2, Goalkick1*, Corner1*, Throwin1        | Restart     | Restart      |
//! | everything else                                   | Idle        | Idle         |

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::actions::Action;
use super::behaviors::{
    FieldPlayerBehavior, GoalkeeperBehavior, IdleBehavior, RestartBehavior, RoleBehavior,
};
use super::context::DecisionContext;
use super::match_state::MatchState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Goalkeeper,
    FieldPlayer,
    Restart,
    Idle,
}

impl Role {
    pub fn select(state: MatchState, shirt: usize) -> Self {
        match state {
            MatchState::Play if shirt == 0 => Role::Goalkeeper,
            MatchState::Play => Role::FieldPlayer,
            MatchState::Kickoff1
            | MatchState::Kickoff2
            | MatchState::Goalkick1up
            | MatchState::Goalkick1down
            | MatchState::Corner1up
            | MatchState::Corner1down
            | MatchState::Throwin1 => Role::Restart,
            _ => Role::Idle,
        }
    }

    pub fn behavior(self) -> &'static dyn RoleBehavior {
        match self {
            Role::Goalkeeper => &GoalkeeperBehavior,
            Role::FieldPlayer => &FieldPlayerBehavior,
            Role::Restart => &RestartBehavior,
            Role::Idle => &IdleBehavior,
        }
    }
}

/// One decision in the canonical frame.
pub fn decide(ctx: &DecisionContext, rng: &mut dyn RngCore) -> Action {
    let role = Role::select(ctx.env.state, ctx.shirt);
    let behavior = role.behavior();
    let action = behavior.decide(ctx, rng);
    trace!(
        shirt = ctx.shirt,
        state = %ctx.env.state,
        role = behavior.name(),
        kind = ?action.kind,
        "decision"
    );
    action
}
