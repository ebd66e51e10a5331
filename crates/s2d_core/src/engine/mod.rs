//! Decision engine
//!
//! Everything below works in the canonical frame: our team is `teams[0]` and
//! attacks toward `x1` (positive x). `frame` maps raw snapshots into that
//! frame and actions back out of it.

pub mod actions;
pub mod advancing; // dribble direction search
pub mod behaviors;
pub mod config; // tuning knobs for passing, dribbling and positioning
pub mod constants;
pub mod context;
pub mod frame;
pub mod geometry;
pub mod marking_manager;
pub mod match_state;
pub mod memory;
pub mod passing;
pub mod pitch;
pub mod role_machine;
pub mod set_pieces;
pub mod settings;

#[cfg(test)]
pub mod test_fixtures;

pub use actions::{Action, ActionKind};
pub use config::AgentConfig;
pub use context::DecisionContext;
pub use frame::CanonicalFrame;
pub use geometry::Vec2;
pub use match_state::{BallInfo, Environment, GameState, MatchState, PlayerInfo, TeamId};
pub use memory::AgentMemory;
pub use pitch::PitchGeometry;
pub use role_machine::Role;
pub use settings::Settings;
