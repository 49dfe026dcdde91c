//! Session driver.
//!
//! `TurnEngine` owns the state of one human-versus-computer session and is
//! the only place it changes. Front ends call its roll and reset methods
//! and read back state and `GameEvent`s.

mod engine;
mod event;

pub use engine::TurnEngine;
pub use event::GameEvent;
