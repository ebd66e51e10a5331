//! Agents: one decision per tick against a shared, read-only snapshot
//!
//! An agent is built once with its team, shirt number and seed, then only
//! ever asked to `step`. Every agent owns its memory and PRNG, so a roster
//! can be stepped in any order against the same `GameState`.

pub mod heuristic;
pub mod manual;
pub mod scripted;

use serde::Serialize;
use tracing::trace;

use crate::engine::actions::Action;
use crate::engine::match_state::GameState;
use crate::error::{AgentError, Result};

pub use crate::engine::match_state::TeamId;
pub use heuristic::HeuristicAgent;
pub use manual::ManualAgent;
pub use scripted::ChaserAgent;

/// Per-tick decision interface shared by every strategy.
pub trait Agent: Send {
    /// Decide this tick's action in the real frame.
    fn step(&mut self, state: &GameState) -> Action;

    fn team(&self) -> TeamId;

    fn shirt(&self) -> usize;

    fn name(&self) -> &'static str {
        "agent"
    }
}

// ============================================================================
// Rosters
// ============================================================================

/// `n_players` heuristic agents for `team`, shirt 0 in goal.
///
/// Each agent is seeded with `seed + shirt` so no two share PRNG state.
pub fn build_team(n_players: usize, team: TeamId, seed: u64) -> Vec<Box<dyn Agent>> {
    (0..n_players)
        .map(|shirt| {
            Box::new(HeuristicAgent::new(team, shirt, seed.wrapping_add(shirt as u64)))
                as Box<dyn Agent>
        })
        .collect()
}

/// Like [`build_team`], with a different strategy in goal.
pub fn build_team_with_goalkeeper(
    n_players: usize,
    team: TeamId,
    seed: u64,
    goalkeeper: Box<dyn Agent>,
) -> Result<Vec<Box<dyn Agent>>> {
    if n_players == 0 {
        return Err(AgentError::ShirtOutOfRange {
            shirt: 0,
            team_size: 0,
        });
    }
    if goalkeeper.shirt() != 0 {
        return Err(AgentError::InvalidGoalkeeperShirt(goalkeeper.shirt()));
    }
    if goalkeeper.team() != team {
        return Err(AgentError::TeamMismatch {
            expected: team,
            found: goalkeeper.team(),
        });
    }

    let mut roster = build_team(n_players, team, seed);
    roster[0] = goalkeeper;
    Ok(roster)
}

// ============================================================================
// Tick orchestration
// ============================================================================

/// One agent's output for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionRecord {
    pub team: TeamId,
    pub shirt: usize,
    pub action: Action,
}

/// Step every agent against the same snapshot, in roster order.
pub fn step_agents(agents: &mut [Box<dyn Agent>], state: &GameState) -> Vec<ActionRecord> {
    let records: Vec<ActionRecord> = agents
        .iter_mut()
        .map(|agent| ActionRecord {
            team: agent.team(),
            shirt: agent.shirt(),
            action: agent.step(state),
        })
        .collect();
    trace!(tick = state.env.tick, agents = records.len(), "stepped roster");
    records
}
