//! Per-tick snapshot types produced by the simulator
//!
//! Everything here is read-only from the agent's point of view. The
//! simulator builds a fresh `GameState` each tick and every agent decides
//! against the same immutable value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Vec2;
use super::pitch::PitchGeometry;
use super::settings::Settings;
use crate::error::{AgentError, Result};

// ============================================================
// Team identity
// ============================================================

/// Which roster an agent belongs to in the real (simulator) frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    /// Attacks +x in the first half
    First,
    /// Attacks -x in the first half
    Second,
}

impl TryFrom<u8> for TeamId {
    type Error = AgentError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(TeamId::First),
            1 => Ok(TeamId::Second),
            other => Err(AgentError::InvalidTeamIndex(other)),
        }
    }
}

// ============================================================
// Match state
// ============================================================

/// Discrete match phase decided by the simulator.
///
/// Suffix `1`/`2` names the team that restarts play. `up`/`down` names the
/// pitch side (positive / negative y) where the restart happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchState {
    #[default]
    Inactive,
    Ready,
    Kickoff1,
    Kickoff2,
    Play,
    Stopped,
    Goalkick1up,
    Goalkick1down,
    Goalkick2up,
    Goalkick2down,
    Corner1up,
    Corner1down,
    Corner2up,
    Corner2down,
    Throwin1,
    Throwin2,
    Paused,
    Halftime,
    Goal1,
    Goal2,
    Ended,
}

impl MatchState {
    pub const COUNT: usize = 21;

    /// Every state in declaration order.
    pub const ALL: [MatchState; MatchState::COUNT] = [
        MatchState::Inactive,
        MatchState::Ready,
        MatchState::Kickoff1,
        MatchState::Kickoff2,
        MatchState::Play,
        MatchState::Stopped,
        MatchState::Goalkick1up,
        MatchState::Goalkick1down,
        MatchState::Goalkick2up,
        MatchState::Goalkick2down,
        MatchState::Corner1up,
        MatchState::Corner1down,
        MatchState::Corner2up,
        MatchState::Corner2down,
        MatchState::Throwin1,
        MatchState::Throwin2,
        MatchState::Paused,
        MatchState::Halftime,
        MatchState::Goal1,
        MatchState::Goal2,
        MatchState::Ended,
    ];

    /// Position in declaration order, used to index lookup tables.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchState::Inactive => "Inactive",
            MatchState::Ready => "Ready",
            MatchState::Kickoff1 => "Kickoff1",
            MatchState::Kickoff2 => "Kickoff2",
            MatchState::Play => "Play",
            MatchState::Stopped => "Stopped",
            MatchState::Goalkick1up => "Goalkick1up",
            MatchState::Goalkick1down => "Goalkick1down",
            MatchState::Goalkick2up => "Goalkick2up",
            MatchState::Goalkick2down => "Goalkick2down",
            MatchState::Corner1up => "Corner1up",
            MatchState::Corner1down => "Corner1down",
            MatchState::Corner2up => "Corner2up",
            MatchState::Corner2down => "Corner2down",
            MatchState::Throwin1 => "Throwin1",
            MatchState::Throwin2 => "Throwin2",
            MatchState::Paused => "Paused",
            MatchState::Halftime => "Halftime",
            MatchState::Goal1 => "Goal1",
            MatchState::Goal2 => "Goal2",
            MatchState::Ended => "Ended",
        }
    }

    /// Kickoff, goal kick, corner or throw-in for either team
    pub fn is_restart(self) -> bool {
        matches!(
            self,
            MatchState::Kickoff1
                | MatchState::Kickoff2
                | MatchState::Goalkick1up
                | MatchState::Goalkick1down
                | MatchState::Goalkick2up
                | MatchState::Goalkick2down
                | MatchState::Corner1up
                | MatchState::Corner1down
                | MatchState::Corner2up
                | MatchState::Corner2down
                | MatchState::Throwin1
                | MatchState::Throwin2
        )
    }

    /// Restart taken by the second team
    pub fn is_team2_starter(self) -> bool {
        matches!(
            self,
            MatchState::Kickoff2
                | MatchState::Goalkick2up
                | MatchState::Goalkick2down
                | MatchState::Corner2up
                | MatchState::Corner2down
                | MatchState::Throwin2
        )
    }

    /// States in which nobody restarts play
    pub fn is_not_starter(self) -> bool {
        !self.is_restart()
    }

    /// Restart taken by the first team (the controlled team in the canonical frame)
    pub fn is_team1_starter(self) -> bool {
        self.is_restart() && !self.is_team2_starter()
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================
// Bodies
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub pos: Vec2,
    pub velocity: Vec2,
    /// Facing, radians in [0, 2π)
    pub direction: f64,
}

impl PlayerInfo {
    pub fn new(x: f64, y: f64, direction: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zeros(),
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallInfo {
    pub pos: Vec2,
    pub velocity: Vec2,
}

impl BallInfo {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zeros(),
        }
    }
}

// ============================================================
// Environment
// ============================================================

/// Dynamic part of the snapshot.
///
/// `teams[t][shirt]`: shirt 0 is the goalkeeper by convention.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Environment {
    pub tick: u32,
    pub score1: u32,
    pub score2: u32,
    pub state: MatchState,
    pub ball: BallInfo,
    pub teams: [Vec<PlayerInfo>; 2],
    pub last_touched_team2: bool,
    /// Ticks the ball stays held by a goalkeeper (0 = free)
    pub ball_catched: u32,
    pub ball_catched_team2: bool,
    pub halftime_passed: bool,
}

// ============================================================
// GameState
// ============================================================

/// Full per-tick input: settings, dynamic environment and derived pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub env: Environment,
    /// Derived from `settings`; rebuilt on deserialization
    #[serde(skip)]
    pub pitch: PitchGeometry,
}

impl GameState {
    pub fn new(settings: Settings, env: Environment) -> Self {
        let pitch = PitchGeometry::from_settings(&settings);
        Self {
            settings,
            env,
            pitch,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut state: GameState = serde_json::from_str(json)?;
        state.pitch = PitchGeometry::from_settings(&state.settings);
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default(), Environment::default())
    }
}
