//! Rule-based agent built on the decision engine
//!
//! Per tick:
//! 1. normalize the snapshot into the canonical frame
//! 2. let the role state machine pick an action there
//! 3. map the action back to the real frame and remember it

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{trace, warn};

use super::{Agent, TeamId};
use crate::engine::actions::Action;
use crate::engine::config::AgentConfig;
use crate::engine::context::DecisionContext;
use crate::engine::frame::CanonicalFrame;
use crate::engine::match_state::GameState;
use crate::engine::memory::AgentMemory;
use crate::engine::role_machine;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    team: TeamId,
    shirt: usize,
    memory: AgentMemory,
    config: AgentConfig,
    /// Only drives idle drift while positioning
    rng: ChaCha8Rng,
}

impl HeuristicAgent {
    pub fn new(team: TeamId, shirt: usize, seed: u64) -> Self {
        Self::with_config(team, shirt, seed, AgentConfig::default())
    }

    pub fn with_config(team: TeamId, shirt: usize, seed: u64, config: AgentConfig) -> Self {
        Self {
            team,
            shirt,
            memory: AgentMemory::new(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Construct from the simulator's raw team index (0 or 1).
    pub fn from_index(team: u8, shirt: usize, seed: u64) -> Result<Self> {
        Ok(Self::new(TeamId::try_from(team)?, shirt, seed))
    }

    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

impl Agent for HeuristicAgent {
    fn step(&mut self, state: &GameState) -> Action {
        let frame = CanonicalFrame::normalize(self.team, &state.env);
        let env = frame.env();
        let team_size = env.teams[0].len();

        if self.shirt >= team_size {
            warn!(
                team = ?self.team,
                shirt = self.shirt,
                team_size,
                "shirt not in roster, idling"
            );
            let action = Action::no_op();
            self.memory.remember(env.state, action);
            return action;
        }

        let canonical = {
            let ctx = DecisionContext::new(
                env,
                &state.settings,
                &state.pitch,
                &self.config,
                &self.memory,
                self.shirt,
            );
            role_machine::decide(&ctx, &mut self.rng)
        };

        let action = frame.to_real(canonical);
        self.memory.remember(env.state, action);
        trace!(
            tick = env.tick,
            team = ?self.team,
            shirt = self.shirt,
            mirrored = frame.is_mirrored(),
            kind = ?action.kind,
            "step"
        );
        action
    }

    fn team(&self) -> TeamId {
        self.team
    }

    fn shirt(&self) -> usize {
        self.shirt
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
