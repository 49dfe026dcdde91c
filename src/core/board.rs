//! The fixed 100-square board and its snake and ladder tables.
//!
//! ## Layout
//!
//! Squares are numbered 1-100. Two lookup tables map a landing square to
//! the square the player ends up on:
//!
//! - **snakes**: always to a lower square
//! - **ladders**: always to a higher square
//!
//! No square is a key in both tables. The tables are validated once when
//! the board is built and are immutable afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// A square number. Intermediate move targets may exceed 100.
pub type Square = u8;

/// The square every token starts on.
pub const START_SQUARE: Square = 1;

/// The winning square.
pub const FINAL_SQUARE: Square = 100;

/// Squares per rendered row.
pub const ROW_WIDTH: usize = 10;

const SNAKES: [(Square, Square); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

const LADDERS: [(Square, Square); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Table validation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} is outside the board")]
    OutOfRange(Square),

    #[error("square {0} has more than one shortcut")]
    DuplicateSquare(Square),

    #[error("snake at {from} must lead down, not to {to}")]
    SnakeNotDescending { from: Square, to: Square },

    #[error("ladder at {from} must lead up, not to {to}")]
    LadderNotAscending { from: Square, to: Square },

    #[error("shortcuts starting at {0} never settle")]
    Cycle(Square),
}

/// What sits on a square, for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    Plain,
    Snake { to: Square },
    Ladder { to: Square },
    /// Square 100.
    Finish,
}

/// Immutable snake and ladder tables.
#[derive(Clone, Debug)]
pub struct Board {
    snakes: FxHashMap<Square, Square>,
    ladders: FxHashMap<Square, Square>,
}

impl Board {
    /// The standard board, built once per process.
    ///
    /// ```
    /// use snakes_ladders::core::Board;
    ///
    /// let board = Board::standard();
    /// assert_eq!(board.ladder_at(4), Some(14));
    /// assert_eq!(board.snake_at(98), Some(78));
    /// assert_eq!(board.follow(50), None);
    /// ```
    #[must_use]
    pub fn standard() -> &'static Board {
        static STANDARD: OnceLock<Board> = OnceLock::new();

        STANDARD.get_or_init(|| {
            Board::from_tables(&SNAKES, &LADDERS).expect("standard board tables are valid")
        })
    }

    /// Build a board from raw tables, checking every table invariant.
    pub(crate) fn from_tables(
        snakes: &[(Square, Square)],
        ladders: &[(Square, Square)],
    ) -> Result<Self, BoardError> {
        let mut board = Self {
            snakes: FxHashMap::default(),
            ladders: FxHashMap::default(),
        };

        for &(from, to) in snakes {
            check_range(from, to)?;
            if to >= from {
                return Err(BoardError::SnakeNotDescending { from, to });
            }
            if board.is_shortcut(from) {
                return Err(BoardError::DuplicateSquare(from));
            }
            board.snakes.insert(from, to);
        }

        for &(from, to) in ladders {
            check_range(from, to)?;
            if to <= from {
                return Err(BoardError::LadderNotAscending { from, to });
            }
            if board.is_shortcut(from) {
                return Err(BoardError::DuplicateSquare(from));
            }
            board.ladders.insert(from, to);
        }

        board.check_settles()?;

        Ok(board)
    }

    /// Every chain must leave the shortcut squares within as many hops as
    /// there are shortcuts.
    fn check_settles(&self) -> Result<(), BoardError> {
        let limit = self.snakes.len() + self.ladders.len();

        for &start in self.snakes.keys().chain(self.ladders.keys()) {
            let mut square = start;
            let mut hops = 0;
            while let Some(next) = self.follow(square) {
                hops += 1;
                if hops > limit {
                    return Err(BoardError::Cycle(start));
                }
                square = next;
            }
        }

        Ok(())
    }

    /// Snake destination at `square`, if any.
    #[must_use]
    pub fn snake_at(&self, square: Square) -> Option<Square> {
        self.snakes.get(&square).copied()
    }

    /// Ladder destination at `square`, if any.
    #[must_use]
    pub fn ladder_at(&self, square: Square) -> Option<Square> {
        self.ladders.get(&square).copied()
    }

    /// Destination of whichever shortcut starts at `square`.
    #[must_use]
    pub fn follow(&self, square: Square) -> Option<Square> {
        self.snake_at(square).or_else(|| self.ladder_at(square))
    }

    #[must_use]
    pub fn is_shortcut(&self, square: Square) -> bool {
        self.snakes.contains_key(&square) || self.ladders.contains_key(&square)
    }

    #[must_use]
    pub fn kind(&self, square: Square) -> SquareKind {
        if let Some(to) = self.snake_at(square) {
            SquareKind::Snake { to }
        } else if let Some(to) = self.ladder_at(square) {
            SquareKind::Ladder { to }
        } else if square == FINAL_SQUARE {
            SquareKind::Finish
        } else {
            SquareKind::Plain
        }
    }

    /// Snakes sorted by starting square.
    #[must_use]
    pub fn snakes(&self) -> Vec<(Square, Square)> {
        sorted(&self.snakes)
    }

    /// Ladders sorted by starting square.
    #[must_use]
    pub fn ladders(&self) -> Vec<(Square, Square)> {
        sorted(&self.ladders)
    }

    /// Squares in grid order: 100 first, down to 1, ten per row.
    pub fn squares_top_down() -> impl Iterator<Item = Square> {
        (START_SQUARE..=FINAL_SQUARE).rev()
    }
}

fn check_range(from: Square, to: Square) -> Result<(), BoardError> {
    for square in [from, to] {
        if !(START_SQUARE..=FINAL_SQUARE).contains(&square) {
            return Err(BoardError::OutOfRange(square));
        }
    }
    Ok(())
}

fn sorted(table: &FxHashMap<Square, Square>) -> Vec<(Square, Square)> {
    let mut entries: Vec<_> = table.iter().map(|(&from, &to)| (from, to)).collect();
    entries.sort_unstable();
    entries
}
