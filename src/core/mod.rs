//! Core game types: board, players, dice, configuration, history, state.
//!
//! These are plain data and small helpers. The rules that tie them together
//! live in `rules`, the session driver in `game`.

pub mod board;
pub mod player;
pub mod rng;
pub mod config;
pub mod history;
pub mod timer;
pub mod state;

pub use board::{Board, BoardError, Square, SquareKind, FINAL_SQUARE, ROW_WIDTH, START_SQUARE};
pub use player::{Player, PlayerId, PlayerMap, Side};
pub use rng::{Dice, GameRng, ScriptedDice, DIE_FACES};
pub use config::GameConfig;
pub use history::{Hop, MoveRecord};
pub use timer::{format_clock, SessionTimer};
pub use state::{GameState, PendingRoll, Phase};
