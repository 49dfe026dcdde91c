//! Events emitted by the turn engine.
//!
//! Front ends drain these after each call instead of diffing state. Sound
//! flags mirror the session's sound setting at the time of the event, so a
//! renderer can play a cue without reading the config itself.

use serde::{Deserialize, Serialize};

use crate::core::{MoveRecord, Side};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A die was drawn and is waiting to be applied.
    DiceRolled { side: Side, value: u8, sound: bool },

    /// A roll was applied to the board.
    Moved(MoveRecord),

    /// A token reached square 100.
    Won {
        winner: Side,
        elapsed_secs: u64,
        sound: bool,
    },

    /// The session went back to its initial state.
    Reset,
}

impl GameEvent {
    /// Whether a front end should play a sound for this event.
    #[must_use]
    pub fn wants_sound(&self) -> bool {
        match self {
            GameEvent::DiceRolled { sound, .. } | GameEvent::Won { sound, .. } => *sound,
            GameEvent::Moved(_) | GameEvent::Reset => false,
        }
    }
}
