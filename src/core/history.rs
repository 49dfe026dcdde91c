//! Move history.
//!
//! One `MoveRecord` per resolved roll, appended in order and never edited.
//! Used for:
//! - The game log shown beside the board
//! - Replaying a seeded session in tests

use serde::{Deserialize, Serialize};

use super::board::Square;
use super::player::{PlayerId, Side};

/// A single snake or ladder applied during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hop {
    Snake { from: Square, to: Square },
    Ladder { from: Square, to: Square },
}

impl Hop {
    #[must_use]
    pub fn start(self) -> Square {
        match self {
            Hop::Snake { from, .. } | Hop::Ladder { from, .. } => from,
        }
    }

    #[must_use]
    pub fn end(self) -> Square {
        match self {
            Hop::Snake { to, .. } | Hop::Ladder { to, .. } => to,
        }
    }
}

impl std::fmt::Display for Hop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hop::Snake { from, to } => write!(f, "🐍 Snake from {from} to {to}"),
            Hop::Ladder { from, to } => write!(f, "🪜 Ladder from {from} to {to}"),
        }
    }
}

/// A resolved move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Face rolled.
    pub die: u8,

    /// Square before the roll.
    pub from: Square,

    /// Square after every snake and ladder resolved.
    pub to: Square,

    /// Last snake or ladder applied. Earlier hops of a chain are not kept.
    pub transition: Option<Hop>,

    /// The roll would have passed square 100, so the token stayed put.
    pub overshoot: bool,

    pub is_computer: bool,
}

impl MoveRecord {
    /// Side that made this move.
    #[must_use]
    pub fn side(&self) -> Side {
        if self.is_computer {
            Side::Computer
        } else {
            Side::Human
        }
    }

    /// Log message for the move. Empty when no snake or ladder applied.
    #[must_use]
    pub fn message(&self) -> String {
        self.transition.map(|hop| hop.to_string()).unwrap_or_default()
    }
}
