//! # snakes-ladders
//!
//! Snakes & Ladders for one human against a scripted computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic core**: move resolution is a pure function of the
//!    board, the start square and the die face. All randomness goes
//!    through the `Dice` trait, so a seed or a script replays a game.
//!
//! 2. **Explicit transitions**: rolls, win detection and resets happen in
//!    plain method calls on `TurnEngine`. Nothing reacts to state changes
//!    behind the caller's back; front ends read `GameEvent`s instead.
//!
//! 3. **Silent rejection**: out-of-turn rolls, rolls while one is pending,
//!    and overshoots past square 100 leave the game unchanged. Game play
//!    has no error channel.
//!
//! ## Modules
//!
//! - `core`: Board tables, players, dice, configuration, history, state
//! - `rules`: Move resolution and win detection
//! - `game`: The turn engine and its events
//! - `error`: Failures at the configuration edge

pub mod core;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, SquareKind, Square, FINAL_SQUARE, START_SQUARE,
    Player, PlayerId, PlayerMap, Side,
    Dice, GameRng, ScriptedDice,
    GameConfig,
    Hop, MoveRecord,
    SessionTimer,
    GameState, PendingRoll, Phase,
};

pub use crate::rules::{resolve_move, GameResult, MoveOutcome};

pub use crate::game::{GameEvent, TurnEngine};

pub use crate::error::{Error, Result};
