//! Player identification and per-side data storage.
//!
//! ## Side
//!
//! The two seats at the table: the human and the scripted computer.
//! Turn order is always human first, then alternating.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `Side` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::{Square, START_SQUARE};

/// Player identifier as shown to the user: 1 = human, 2 = computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One of the two seats in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player. Always moves first.
    Human,
    /// The scripted computer opponent.
    Computer,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Human, Side::Computer];

    /// Turn index: 0 for the human, 1 for the computer.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }

    /// The side that moves after this one.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// The player ID shown for this side.
    #[must_use]
    pub const fn player_id(self) -> PlayerId {
        match self {
            Side::Human => PlayerId(1),
            Side::Computer => PlayerId(2),
        }
    }

    #[must_use]
    pub const fn is_computer(self) -> bool {
        matches!(self, Side::Computer)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// A token on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,

    /// Current square, always in `1..=100`.
    pub position: Square,

    /// Display color name for the rendering surface.
    pub color: &'static str,

    /// Display icon for the rendering surface.
    pub icon: &'static str,

    pub is_computer: bool,
}

impl Player {
    /// Create the token for a side, standing on the start square.
    #[must_use]
    pub fn for_side(side: Side) -> Self {
        let (color, icon) = match side {
            Side::Human => ("blue", "🚀"),
            Side::Computer => ("green", "🤖"),
        };

        Self {
            id: side.player_id(),
            position: START_SQUARE,
            color,
            icon,
            is_computer: side.is_computer(),
        }
    }

    /// Side this token belongs to.
    #[must_use]
    pub fn side(&self) -> Side {
        if self.is_computer {
            Side::Computer
        } else {
            Side::Human
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerMap, Side};
///
/// let mut dice: PlayerMap<u8> = PlayerMap::with_value(0);
/// dice[Side::Computer] = 4;
///
/// assert_eq!(dice[Side::Human], 0);
/// assert_eq!(dice[Side::Computer], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Human), factory(Side::Computer)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for PlayerMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PlayerMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
