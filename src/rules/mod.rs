//! Game rules.
//!
//! Pure functions that decide:
//! - Where a roll takes a token (snakes, ladders, overshoot)
//! - Whether the game is over
//!
//! The session driver calls into these but never re-implements them.

pub mod engine;

pub use engine::{resolve_move, winner, GameResult, MoveOutcome};
