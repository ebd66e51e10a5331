//! Test fixtures for decision scenarios
//!
//! `Fixture` owns everything a `DecisionContext` borrows, so tests can build a
//! snapshot in a few chained calls and ask for a context per shirt.
//!
//! Positions are given in the canonical frame (we attack +x). Our players face
//! +x and opponents face -x unless set otherwise.

use std::f64::consts::PI;

use super::actions::Action;
use super::config::AgentConfig;
use super::context::DecisionContext;
use super::match_state::{BallInfo, Environment, GameState, MatchState, PlayerInfo};
use super::memory::AgentMemory;
use super::pitch::PitchGeometry;
use super::settings::Settings;

#[derive(Debug, Clone)]
pub struct Fixture {
    pub settings: Settings,
    pub pitch: PitchGeometry,
    pub config: AgentConfig,
    pub memory: AgentMemory,
    pub env: Environment,
}

impl Fixture {
    /// Default 4-a-side pitch in open play, ball on the centre spot, one
    /// goalkeeper per side.
    pub fn new() -> Self {
        let settings = Settings::default();
        let pitch = PitchGeometry::from_settings(&settings);
        let mut env = Environment::default();
        env.state = MatchState::Play;
        env.teams[0] = vec![PlayerInfo::new(pitch.x2 + 1.0, 0.0, 0.0)];
        env.teams[1] = vec![PlayerInfo::new(pitch.x1 - 1.0, 0.0, PI)];
        Self {
            settings,
            pitch,
            config: AgentConfig::default(),
            memory: AgentMemory::default(),
            env,
        }
    }

    pub fn ball(mut self, x: f64, y: f64) -> Self {
        self.env.ball = BallInfo::at(x, y);
        self
    }

    pub fn ours(mut self, positions: &[(f64, f64)]) -> Self {
        self.env.teams[0] = positions
            .iter()
            .map(|&(x, y)| PlayerInfo::new(x, y, 0.0))
            .collect();
        self
    }

    pub fn theirs(mut self, positions: &[(f64, f64)]) -> Self {
        self.env.teams[1] = positions
            .iter()
            .map(|&(x, y)| PlayerInfo::new(x, y, PI))
            .collect();
        self
    }

    pub fn facing(mut self, shirt: usize, direction: f64) -> Self {
        self.env.teams[0][shirt].direction = direction;
        self
    }

    pub fn state(mut self, state: MatchState) -> Self {
        self.env.state = state;
        self
    }

    pub fn prev_state(mut self, state: MatchState) -> Self {
        self.memory.prev_state = state;
        self
    }

    pub fn prev_action(mut self, action: Action) -> Self {
        self.memory.prev_action = action;
        self
    }

    pub fn full_rules(mut self) -> Self {
        self.settings.simplified = false;
        self
    }

    pub fn simplified(mut self) -> Self {
        self.settings.simplified = true;
        self
    }

    pub fn ctx(&self, shirt: usize) -> DecisionContext<'_> {
        DecisionContext::new(
            &self.env,
            &self.settings,
            &self.pitch,
            &self.config,
            &self.memory,
            shirt,
        )
    }

    /// Real-frame snapshot for the first team in the first half.
    pub fn game_state(&self) -> GameState {
        GameState::new(self.settings.clone(), self.env.clone())
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
