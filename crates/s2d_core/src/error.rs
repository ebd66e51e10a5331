use thiserror::Error;

use crate::engine::match_state::TeamId;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid team index: {0} (expected 0 or 1)")]
    InvalidTeamIndex(u8),

    #[error("Shirt number {shirt} out of range for a team of {team_size}")]
    ShirtOutOfRange { shirt: usize, team_size: usize },

    #[error("Goalkeeper must wear shirt 0, got {0}")]
    InvalidGoalkeeperShirt(usize),

    #[error("Agent plays for {found:?}, roster is {expected:?}")]
    TeamMismatch { expected: TeamId, found: TeamId },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgentError {
    /// Errors raised while building agents can be fixed by the host and retried.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AgentError::InvalidTeamIndex(_) => false,
            AgentError::ShirtOutOfRange { .. } => true,
            AgentError::InvalidGoalkeeperShirt(_) => true,
            AgentError::TeamMismatch { .. } => true,
            AgentError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;
