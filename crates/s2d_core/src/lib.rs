//! # s2d_core - Deterministic Decision Engine for 2D Soccer Agents
//!
//! Reactive, per-tick agents for a simplified 2D soccer simulator. Each agent
//! reads one immutable snapshot and returns one primitive action.
//!
//! ## Features
//! - Canonical frame: every decision is made as the left team attacking +x
//! - Pass scoring, dribble search and greedy man-marking
//! - Fixed restart formations for kickoffs, goal kicks, corners and throw-ins
//! - 100% deterministic (same seed = same actions)
//! - JSON boundary for hosts that exchange snapshots as text
//!
//! ```
//! use s2d_core::agent::{build_team, step_agents, TeamId};
//! use s2d_core::engine::GameState;
//!
//! let state = GameState::default();
//! let mut roster = build_team(4, TeamId::First, 42);
//! let actions = step_agents(&mut roster, &state);
//! assert_eq!(actions.len(), 4);
//! ```

// Allow unused code for features under development
#![allow(dead_code)]
// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]
// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Decision helpers often take many geometric parameters
#![allow(clippy::too_many_arguments)]
// Loop style - can fix incrementally
#![allow(clippy::needless_range_loop)]
// Method naming conventions - would require API changes
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]

pub mod agent;
pub mod engine;
pub mod error;

// Re-export agent API
pub use agent::{
    build_team, build_team_with_goalkeeper, step_agents, ActionRecord, Agent, ChaserAgent,
    HeuristicAgent, ManualAgent,
};

// Re-export snapshot and action types
pub use engine::{
    Action, ActionKind, AgentConfig, AgentMemory, BallInfo, Environment, GameState, MatchState,
    PitchGeometry, PlayerInfo, Settings, TeamId,
};

pub use error::{AgentError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
