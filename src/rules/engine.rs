//! Move resolution and win detection.
//!
//! Both are pure functions over the board and positions:
//! - `resolve_move`: where a token ends up after a roll
//! - `winner`: who, if anyone, stands on square 100
//!
//! The session driver applies their results to `GameState`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Hop, Player, PlayerMap, Side, Square, FINAL_SQUARE};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Side,

    /// Session time when the winning move landed.
    pub elapsed_secs: u64,

    /// Moves resolved in the game, the winning one included.
    pub moves: usize,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

/// Where a roll takes a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Square before the roll.
    pub from: Square,

    pub die: u8,

    /// `from + die`, before any snake or ladder.
    pub target: u16,

    /// Final square.
    pub to: Square,

    /// Every snake and ladder applied, in order.
    pub hops: SmallVec<[Hop; 2]>,

    /// The target was past square 100; `to == from`.
    pub overshoot: bool,
}

impl MoveOutcome {
    /// Last hop of the chain, which names the move in the log.
    #[must_use]
    pub fn transition(&self) -> Option<Hop> {
        self.hops.last().copied()
    }

    /// The move ends on square 100.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.to == FINAL_SQUARE
    }
}

/// Resolve a roll of `die` from square `from`.
///
/// A target past 100 leaves the token where it was. Otherwise snakes and
/// ladders are followed until the token rests on a square that starts
/// neither.
///
/// ```
/// use snakes_ladders::core::{Board, Hop};
/// use snakes_ladders::rules::resolve_move;
///
/// let outcome = resolve_move(Board::standard(), 1, 3);
/// assert_eq!(outcome.to, 14);
/// assert_eq!(outcome.transition(), Some(Hop::Ladder { from: 4, to: 14 }));
///
/// let outcome = resolve_move(Board::standard(), 98, 5);
/// assert!(outcome.overshoot);
/// assert_eq!(outcome.to, 98);
/// ```
#[must_use]
pub fn resolve_move(board: &Board, from: Square, die: u8) -> MoveOutcome {
    let target = u16::from(from) + u16::from(die);

    let mut outcome = MoveOutcome {
        from,
        die,
        target,
        to: from,
        hops: SmallVec::new(),
        overshoot: false,
    };

    if target > u16::from(FINAL_SQUARE) {
        outcome.overshoot = true;
        return outcome;
    }

    // Fits in a Square: target <= 100.
    let mut square = target as Square;
    loop {
        let hop = if let Some(to) = board.snake_at(square) {
            Hop::Snake { from: square, to }
        } else if let Some(to) = board.ladder_at(square) {
            Hop::Ladder { from: square, to }
        } else {
            break;
        };
        outcome.hops.push(hop);
        square = hop.end();
    }

    outcome.to = square;
    outcome
}

/// Side standing on square 100, if any.
#[must_use]
pub fn winner(players: &PlayerMap<Player>) -> Option<Side> {
    players
        .iter()
        .find(|(_, player)| player.position == FINAL_SQUARE)
        .map(|(side, _)| side)
}
