//! Primitive actions an agent hands back to the simulator
//!
//! | kind  | data[0]          | data[1]   | data[2]  |
//! |-------|------------------|-----------|----------|
//! | NoOp  | -                | -         | -        |
//! | Move  | x                | y         | heading  |
//! | Dash  | direction        | power     | -        |
//! | Turn  | direction        | -         | -        |
//! | Kick  | direction        | power     | -        |
//! | Catch | -                | -         | -        |
//!
//! Unused slots are carried as-is and never validated.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActionKind {
    #[default]
    NoOp,
    Move,
    Dash,
    Turn,
    Kick,
    Catch,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub data: [f64; 3],
}

impl Action {
    pub fn no_op() -> Self {
        Self::default()
    }

    /// Teleport-style placement, only honoured during restarts.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::move_facing(x, y, 0.0)
    }

    pub fn move_facing(x: f64, y: f64, heading: f64) -> Self {
        Self {
            kind: ActionKind::Move,
            data: [x, y, heading],
        }
    }

    pub fn dash(direction: f64, power: f64) -> Self {
        Self {
            kind: ActionKind::Dash,
            data: [direction, power, 0.0],
        }
    }

    pub fn turn(direction: f64) -> Self {
        Self {
            kind: ActionKind::Turn,
            data: [direction, 0.0, 0.0],
        }
    }

    pub fn kick(direction: f64, power: f64) -> Self {
        Self {
            kind: ActionKind::Kick,
            data: [direction, power, 0.0],
        }
    }

    pub fn catch() -> Self {
        Self {
            kind: ActionKind::Catch,
            data: [0.0; 3],
        }
    }

    #[inline]
    pub fn is(&self, kind: ActionKind) -> bool {
        self.kind == kind
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_op() {
        let a = Action::default();
        assert!(a.is(ActionKind::NoOp));
        assert_eq!(a, Action::no_op());
    }

    #[test]
    fn test_constructors_fill_slots() {
        let m = Action::move_facing(1.0, -2.0, 0.5);
        assert_eq!(m.data, [1.0, -2.0, 0.5]);

        let k = Action::kick(3.0, 0.65);
        assert!(k.is(ActionKind::Kick));
        assert_eq!(k.data[0], 3.0);
        assert_eq!(k.data[1], 0.65);
    }

    #[test]
    fn test_action_json() {
        let d = Action::dash(1.25, 0.06);
        let json = d.to_json().unwrap();
        assert!(json.contains("Dash"));
        assert_eq!(Action::from_json(&json).unwrap(), d);
        assert!(Action::from_json("[]").is_err());
    }
}
