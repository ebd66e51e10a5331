//! Canonical frame normalization
//!
//! Every decision routine works in one frame: the controlled team sits in
//! `teams[0]`, attacks the `x1` goal and restarts labelled `1` are its own.
//! `CanonicalFrame` builds that view from the raw snapshot and maps the
//! chosen action back to the simulator frame.
//!
//! Three independent steps:
//! 1. team swap, when the controlled team is the second team
//! 2. half-time relabel of the up/down side of goal kicks and corners
//! 3. point mirror of positions, velocities and facings, when the controlled
//!    team attacks -x in the real frame (second team XOR half-time passed)
//!
//! The team-swap table pairs `1up` with `2down` because the mirror also flips
//! the y axis. In the second half without a team swap, the half-time table
//! flips the side for the same reason. Both together cancel out, matching a
//! second team in the second half that needs no mirror at all.

use std::borrow::Cow;
use std::f64::consts::PI;

use super::actions::{Action, ActionKind};
use super::geometry::normalize_positive;
use super::match_state::{Environment, MatchState, PlayerInfo, TeamId};

use MatchState::*;

// ============================================================
// State relabel tables (indexed by MatchState::ordinal)
// ============================================================

/// Relabel when the controlled team is the second team.
const TEAM_SWAP: [MatchState; MatchState::COUNT] = [
    Inactive,
    Ready,
    Kickoff2,
    Kickoff1,
    Play,
    Stopped,
    Goalkick2down,
    Goalkick2up,
    Goalkick1down,
    Goalkick1up,
    Corner2down,
    Corner2up,
    Corner1down,
    Corner1up,
    Throwin2,
    Throwin1,
    Paused,
    Halftime,
    Goal2,
    Goal1,
    Ended,
];

/// Relabel after half-time: sides of goal kicks and corners are flipped.
const HALFTIME_SIDE_FLIP: [MatchState; MatchState::COUNT] = [
    Inactive,
    Ready,
    Kickoff1,
    Kickoff2,
    Play,
    Stopped,
    Goalkick1down,
    Goalkick1up,
    Goalkick2down,
    Goalkick2up,
    Corner1down,
    Corner1up,
    Corner2down,
    Corner2up,
    Throwin1,
    Throwin2,
    Paused,
    Halftime,
    Goal1,
    Goal2,
    Ended,
];

#[inline]
pub fn swap_team_state(state: MatchState) -> MatchState {
    TEAM_SWAP[state.ordinal()]
}

#[inline]
pub fn halftime_state(state: MatchState) -> MatchState {
    HALFTIME_SIDE_FLIP[state.ordinal()]
}

/// Whether `team` attacks -x in the real frame and must be point-mirrored.
#[inline]
pub fn needs_mirror(team: TeamId, halftime_passed: bool) -> bool {
    (team == TeamId::Second) != halftime_passed
}

// ============================================================
// CanonicalFrame
// ============================================================

/// Canonical view of one snapshot for one team.
///
/// Borrows the raw environment untouched when no transform applies.
#[derive(Debug, Clone)]
pub struct CanonicalFrame<'a> {
    env: Cow<'a, Environment>,
    mirrored: bool,
}

impl<'a> CanonicalFrame<'a> {
    pub fn normalize(team: TeamId, raw: &'a Environment) -> Self {
        let swapped = team == TeamId::Second;
        let halftime = raw.halftime_passed;
        let mirrored = needs_mirror(team, halftime);

        if !swapped && !halftime {
            return Self {
                env: Cow::Borrowed(raw),
                mirrored: false,
            };
        }

        let mut env = raw.clone();

        if swapped {
            env.teams.swap(0, 1);
            std::mem::swap(&mut env.score1, &mut env.score2);
            env.last_touched_team2 = !env.last_touched_team2;
            env.ball_catched_team2 = !env.ball_catched_team2;
            env.state = swap_team_state(env.state);
        }

        if halftime {
            env.state = halftime_state(env.state);
        }

        if mirrored {
            env.ball.pos = -env.ball.pos;
            env.ball.velocity = -env.ball.velocity;
            for player in env.teams.iter_mut().flat_map(|t| t.iter_mut()) {
                mirror_player(player);
            }
        }

        Self {
            env: Cow::Owned(env),
            mirrored,
        }
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Map an action chosen in the canonical frame back to the real frame.
    pub fn to_real(&self, action: Action) -> Action {
        if self.mirrored {
            mirror_action(action)
        } else {
            action
        }
    }
}

fn mirror_player(player: &mut PlayerInfo) {
    player.pos = -player.pos;
    player.velocity = -player.velocity;
    player.direction = normalize_positive(player.direction + PI);
}

/// Point-mirror the positional and directional slots of an action.
pub fn mirror_action(mut action: Action) -> Action {
    match action.kind {
        ActionKind::Move => {
            action.data[0] = -action.data[0];
            action.data[1] = -action.data[1];
            action.data[2] = normalize_positive(action.data[2] + PI);
        }
        ActionKind::Dash | ActionKind::Turn | ActionKind::Kick | ActionKind::Catch => {
            action.data[0] = normalize_positive(action.data[0] + PI);
        }
        ActionKind::NoOp => {}
    }
    action
}
