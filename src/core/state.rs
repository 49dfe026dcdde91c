//! Session state.
//!
//! Everything a rendering surface needs to draw the game:
//! - Phase and whose turn it is
//! - Token positions
//! - Last die face per side and the roll in flight
//! - Move history and session timer
//!
//! History uses `im::Vector` so snapshots handed to a renderer are O(1)
//! clones that later moves never touch.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::board::Square;
use super::history::MoveRecord;
use super::player::{Player, PlayerMap, Side};
use super::timer::SessionTimer;

/// Session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No roll yet since the session started or was reset.
    #[default]
    Idle,
    /// At least one roll requested, nobody on square 100.
    Active,
    /// A token reached square 100. Terminal until reset.
    Won(Side),
}

impl Phase {
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, Phase::Won(_))
    }

    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Phase::Won(side) => Some(side),
            _ => None,
        }
    }
}

/// A roll drawn but not yet applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRoll {
    pub side: Side,
    pub value: u8,

    /// How long a front end should show the roll before completing it.
    pub delay: Duration,
}

/// Complete session state.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    pub phase: Phase,

    /// Side to act next.
    pub turn: Side,

    pub players: PlayerMap<Player>,

    /// Last face rolled per side, 0 before that side's first roll.
    pub dice: PlayerMap<u8>,

    /// Roll in flight. `Some` is the turn-in-progress flag.
    pub pending: Option<PendingRoll>,

    pub history: Vector<MoveRecord>,

    pub timer: SessionTimer,
}

impl GameState {
    /// Fresh session: both tokens on square 1, human to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            turn: Side::Human,
            players: PlayerMap::new(Player::for_side),
            dice: PlayerMap::with_value(0),
            pending: None,
            history: Vector::new(),
            timer: SessionTimer::new(),
        }
    }

    #[must_use]
    pub fn position(&self, side: Side) -> Square {
        self.players[side].position
    }

    /// Whether a roll is in flight.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether play is running (`Active`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Append a resolved move.
    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    /// Number of moves resolved this session.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
