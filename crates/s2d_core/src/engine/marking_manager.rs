//! Greedy man-marking assignment
//!
//! Our goalkeeper and our field player closest to the ball never mark. Their
//! goalkeeper and their field player closest to the ball are never marked.
//! Every other opponent, in shirt order, takes the nearest still-free
//! teammate (squared distance, lowest shirt on ties). Opponents left over once
//! teammates run out stay unmarked.

use serde::{Deserialize, Serialize};

use super::context::closest_field_player;
use super::geometry::{distance_squared, Vec2};
use super::match_state::PlayerInfo;

/// Marking role of one of our players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkAssignment {
    /// Free: no opponent left to mark
    #[default]
    Unassigned,
    /// Goalkeeper, or the player going for the ball
    Busy,
    /// Marks the opponent with this shirt number
    Marking(usize),
}

/// Assignment for a whole team, indexed by our shirt numbers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkingPlan {
    assignments: Vec<MarkAssignment>,
}

impl MarkingPlan {
    pub fn assign(ours: &[PlayerInfo], theirs: &[PlayerInfo], ball: Vec2) -> Self {
        let mut assignments = vec![MarkAssignment::Unassigned; ours.len()];
        if ours.is_empty() {
            return Self { assignments };
        }

        let busy = closest_field_player(ours, ball);
        assignments[busy] = MarkAssignment::Busy;
        assignments[0] = MarkAssignment::Busy;

        let busy_opponent = closest_field_player(theirs, ball);
        for (opponent, target) in theirs.iter().enumerate().skip(1) {
            if opponent == busy_opponent {
                continue;
            }
            if let Some(marker) = nearest_free(&assignments, ours, target.pos) {
                assignments[marker] = MarkAssignment::Marking(opponent);
            }
        }

        Self { assignments }
    }

    /// Role of `shirt`; out-of-range shirts read as unassigned.
    pub fn get(&self, shirt: usize) -> MarkAssignment {
        self.assignments.get(shirt).copied().unwrap_or_default()
    }

    /// (our shirt, their shirt) pairs
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .filter_map(|(i, a)| match a {
                MarkAssignment::Marking(opp) => Some((i, *opp)),
                _ => None,
            })
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Nearest unassigned teammate to `pos`; goalkeeper is always busy.
fn nearest_free(assignments: &[MarkAssignment], ours: &[PlayerInfo], pos: Vec2) -> Option<usize> {
    let mut nearest = None;
    let mut min_dist = f64::INFINITY;
    for (i, player) in ours.iter().enumerate() {
        if assignments[i] != MarkAssignment::Unassigned {
            continue;
        }
        let d = distance_squared(pos, player.pos);
        if d < min_dist {
            nearest = Some(i);
            min_dist = d;
        }
    }
    nearest.filter(|&i| i > 0)
}
