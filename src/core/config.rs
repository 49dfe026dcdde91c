//! Session configuration.
//!
//! Everything here is cosmetic or pacing: names, the sound toggle and the
//! presentation delays never change how a move resolves. The seed only
//! picks which die sequence a session gets.
//!
//! Configs are built in code with the `with_*` methods or read from JSON,
//! where every field is optional:
//!
//! ```
//! use snakes_ladders::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "player_name": "Ada", "seed": 7 }"#).unwrap();
//! assert_eq!(config.player_name, "Ada");
//! assert_eq!(config.computer_name, "Computer");
//! assert_eq!(config.seed, Some(7));
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::player::Side;
use crate::error::Error;

/// Default pause before a human roll resolves.
pub const HUMAN_DELAY_MS: u64 = 800;

/// Default "thinking" pause before a computer roll resolves.
pub const COMPUTER_DELAY_MS: u64 = 1000;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name for the human player.
    pub player_name: String,

    /// Display name for the computer player.
    pub computer_name: String,

    /// Whether front ends should play sound cues.
    pub sound_enabled: bool,

    /// Presentation delay for human rolls, in milliseconds.
    pub human_delay_ms: u64,

    /// Presentation delay for computer rolls, in milliseconds.
    pub computer_delay_ms: u64,

    /// Die seed. `None` draws one from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            computer_name: "Computer".to_string(),
            sound_enabled: true,
            human_delay_ms: HUMAN_DELAY_MS,
            computer_delay_ms: COMPUTER_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the human player's display name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Enable or disable sound cues.
    #[must_use]
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Set both presentation delays.
    #[must_use]
    pub fn with_delays(mut self, human_ms: u64, computer_ms: u64) -> Self {
        self.human_delay_ms = human_ms;
        self.computer_delay_ms = computer_ms;
        self
    }

    /// Resolve rolls without any presentation delay.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_delays(0, 0)
    }

    /// Fix the die seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Presentation delay for a side's roll.
    #[must_use]
    pub fn delay_for(&self, side: Side) -> Duration {
        let ms = match side {
            Side::Human => self.human_delay_ms,
            Side::Computer => self.computer_delay_ms,
        };
        Duration::from_millis(ms)
    }

    /// Display name for a side.
    #[must_use]
    pub fn name_for(&self, side: Side) -> &str {
        match side {
            Side::Human => &self.player_name,
            Side::Computer => &self.computer_name,
        }
    }
}
