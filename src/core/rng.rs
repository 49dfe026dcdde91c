//! Die sources.
//!
//! The engine draws every roll through the `Dice` trait so callers can
//! swap the source:
//!
//! - **`GameRng`**: seeded ChaCha8, same seed produces the same game
//! - **`ScriptedDice`**: replays a fixed list of faces, for tests and demos
//!
//! ```
//! use snakes_ladders::core::{Dice, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     let face = a.roll();
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Faces on the die.
pub const DIE_FACES: u8 = 6;

/// A source of die rolls.
pub trait Dice {
    /// Roll once. Must return a value in `1..=DIE_FACES`.
    fn roll(&mut self) -> u8;
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Seeded uniform die.
///
/// Uses ChaCha8 so the sequence is stable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create a script from the given faces.
    ///
    /// Panics if `faces` is empty or holds a value outside `1..=6`.
    #[must_use]
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        let faces = faces.into();
        assert!(!faces.is_empty(), "Script needs at least one face");
        assert!(
            faces.iter().all(|f| (1..=DIE_FACES).contains(f)),
            "Faces must be between 1 and 6"
        );

        Self { faces, next: 0 }
    }

    /// Rolls drawn so far.
    #[must_use]
    pub fn rolls_drawn(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}
