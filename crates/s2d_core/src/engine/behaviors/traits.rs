//! Trait definitions for role behaviours
//!
//! One implementation per role the state machine can dispatch to.

use rand::RngCore;

use crate::engine::actions::Action;
use crate::engine::context::DecisionContext;

/// Decision logic for one role (goalkeeper, field player, restart formation)
///
/// Implementations are stateless: everything they read comes from the
/// context, and the only mutable input is the agent's own PRNG.
pub trait RoleBehavior: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &'static str;

    /// Choose this tick's action in the canonical frame.
    fn decide(&self, ctx: &DecisionContext, rng: &mut dyn RngCore) -> Action;
}
