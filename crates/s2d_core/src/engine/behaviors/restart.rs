//! Restart formations and idle states

use rand::RngCore;

use super::traits::RoleBehavior;
use crate::engine::actions::Action;
use crate::engine::context::DecisionContext;
use crate::engine::match_state::MatchState;
use crate::engine::set_pieces;

/// Kickoffs for both sides and our own goal kicks, corners and throw-ins.
pub struct RestartBehavior;

impl RoleBehavior for RestartBehavior {
    fn name(&self) -> &'static str {
        "restart"
    }

    fn decide(&self, ctx: &DecisionContext, _rng: &mut dyn RngCore) -> Action {
        match ctx.env.state {
            MatchState::Kickoff1 => set_pieces::kickoff(ctx, true),
            MatchState::Kickoff2 => set_pieces::kickoff(ctx, false),
            MatchState::Goalkick1up => set_pieces::goal_kick(ctx, true),
            MatchState::Goalkick1down => set_pieces::goal_kick(ctx, false),
            MatchState::Corner1up => set_pieces::corner(ctx, true),
            MatchState::Corner1down => set_pieces::corner(ctx, false),
            MatchState::Throwin1 => set_pieces::throw_in(ctx),
            _ => Action::no_op(),
        }
    }
}

/// Opponent restarts, stoppages and terminal states: stand still.
pub struct IdleBehavior;

impl RoleBehavior for IdleBehavior {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn decide(&self, _ctx: &DecisionContext, _rng: &mut dyn RngCore) -> Action {
        Action::no_op()
    }
}
