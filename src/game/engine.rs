//! The turn engine: one human against the computer on the standard board.
//!
//! ## Driving a session
//!
//! A roll happens in two steps so front ends can animate the die:
//!
//! 1. `request_roll(side)` draws the face and returns a `PendingRoll`
//!    carrying the presentation delay for that side.
//! 2. `complete_roll()` applies it: the token moves, history grows, the
//!    win check runs and the turn passes.
//!
//! `roll(side)` does both at once. The computer never waits for input: as
//! soon as `computer_should_roll()` is true the driver rolls for it.
//!
//! Out-of-turn requests, a second request while one is pending, and
//! rolls after the game is won are ignored rather than reported.
//!
//! ```
//! use snakes_ladders::core::{GameConfig, Phase, ScriptedDice, Side};
//! use snakes_ladders::game::TurnEngine;
//!
//! let mut engine = TurnEngine::with_dice(GameConfig::new(), ScriptedDice::new([3, 2]));
//!
//! let record = engine.roll(Side::Human).unwrap();
//! assert_eq!(record.to, 14); // 1 + 3 lands on the 4 -> 14 ladder
//! assert_eq!(engine.phase(), Phase::Active);
//! assert!(engine.computer_should_roll());
//!
//! // Not the human's turn any more.
//! assert!(engine.roll(Side::Human).is_none());
//! ```

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, instrument, trace};

use super::event::GameEvent;
use crate::core::{
    Board, Dice, GameConfig, GameRng, GameState, MoveRecord, PendingRoll, Phase, Player,
    PlayerMap, Side, Square,
};
use crate::rules::{self, GameResult};

/// Session driver.
///
/// Generic over the die source so tests can script every roll.
pub struct TurnEngine<D = GameRng> {
    board: &'static Board,
    config: GameConfig,
    state: GameState,
    dice: D,
    events: Vec<GameEvent>,
}

impl TurnEngine<GameRng> {
    /// Create a session with a ChaCha8 die, seeded from `config.seed` or
    /// from the operating system.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(seed = rng.seed(), "seeded session dice");
        Self::with_dice(config, rng)
    }
}

impl<D: Dice> TurnEngine<D> {
    /// Create a session with the given die source.
    #[must_use]
    pub fn with_dice(config: GameConfig, dice: D) -> Self {
        Self {
            board: Board::standard(),
            config,
            state: GameState::new(),
            dice,
            events: Vec::new(),
        }
    }

    // === Observation ===

    #[must_use]
    pub fn board(&self) -> &'static Board {
        self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Side to act next.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.state.turn
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.state.players
    }

    #[must_use]
    pub fn position(&self, side: Side) -> Square {
        self.state.position(side)
    }

    /// Last face a side rolled, 0 if it has not rolled yet.
    #[must_use]
    pub fn last_die(&self, side: Side) -> u8 {
        self.state.dice[side]
    }

    /// Roll in flight, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingRoll> {
        self.state.pending
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.state.is_rolling()
    }

    /// Move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.state.history
    }

    /// Move history, newest first, as a log panel shows it.
    pub fn history_newest_first(&self) -> impl Iterator<Item = &MoveRecord> {
        self.state.history.iter().rev()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.state.timer.elapsed_secs()
    }

    /// Session time as `m:ss`.
    #[must_use]
    pub fn clock(&self) -> String {
        self.state.timer.format()
    }

    #[must_use]
    pub fn display_name(&self, side: Side) -> &str {
        self.config.name_for(side)
    }

    /// The finished game, once someone stands on square 100.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.phase.winner().map(|winner| GameResult {
            winner,
            elapsed_secs: self.elapsed_secs(),
            moves: self.state.moves_played(),
        })
    }

    /// Headline for the end-of-game screen.
    #[must_use]
    pub fn winner_banner(&self) -> Option<String> {
        self.state.phase.winner().map(|winner| match winner {
            Side::Human => format!("🎉 {} Wins!", self.display_name(winner)),
            Side::Computer => format!("🤖 {} Wins!", self.display_name(winner)),
        })
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Settings ===

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.config.player_name = name.into();
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.config.sound_enabled = enabled;
    }

    // === Rolling ===

    /// Whether the computer must roll now.
    #[must_use]
    pub fn computer_should_roll(&self) -> bool {
        self.state.turn == Side::Computer && !self.state.is_rolling() && !self.state.phase.is_won()
    }

    /// Draw a die for `side`.
    ///
    /// Returns `None` and changes nothing when it is not `side`'s turn, a
    /// roll is already pending, or the game is over.
    #[instrument(skip(self), level = "debug")]
    pub fn request_roll(&mut self, side: Side) -> Option<PendingRoll> {
        if self.state.phase.is_won() {
            trace!("ignored roll: game is over");
            return None;
        }
        if self.state.turn != side {
            trace!(turn = %self.state.turn, "ignored roll: not this side's turn");
            return None;
        }
        if self.state.is_rolling() {
            trace!("ignored roll: a roll is already pending");
            return None;
        }

        if self.state.phase == Phase::Idle {
            self.state.phase = Phase::Active;
            self.state.timer.start();
        }

        let value = self.dice.roll();
        debug_assert!((1..=crate::core::DIE_FACES).contains(&value));

        let pending = PendingRoll {
            side,
            value,
            delay: self.config.delay_for(side),
        };
        self.state.dice[side] = value;
        self.state.pending = Some(pending);
        self.events.push(GameEvent::DiceRolled {
            side,
            value,
            sound: self.config.sound_enabled,
        });

        debug!(value, "dice rolled");
        Some(pending)
    }

    /// Apply the pending roll. Returns `None` if nothing is pending.
    #[instrument(skip(self), level = "debug")]
    pub fn complete_roll(&mut self) -> Option<MoveRecord> {
        let pending = self.state.pending.take()?;

        let record = self.resolve_move(pending.side, pending.value);
        self.state.turn = pending.side.other();

        Some(record)
    }

    /// Request and complete a roll in one call.
    pub fn roll(&mut self, side: Side) -> Option<MoveRecord> {
        self.request_roll(side)?;
        self.complete_roll()
    }

    /// Roll for the computer if it is due.
    pub fn step_computer(&mut self) -> Option<MoveRecord> {
        if !self.computer_should_roll() {
            return None;
        }
        self.roll(Side::Computer)
    }

    /// Move `side` by `die`, record it, then check for a winner.
    fn resolve_move(&mut self, side: Side, die: u8) -> MoveRecord {
        let player = &mut self.state.players[side];
        let outcome = rules::resolve_move(self.board, player.position, die);
        player.position = outcome.to;

        let record = MoveRecord {
            player: player.id,
            die,
            from: outcome.from,
            to: outcome.to,
            transition: outcome.transition(),
            overshoot: outcome.overshoot,
            is_computer: player.is_computer,
        };

        debug!(
            side = %side,
            die,
            from = record.from,
            to = record.to,
            overshoot = record.overshoot,
            "move resolved"
        );

        self.state.record_move(record.clone());
        self.events.push(GameEvent::Moved(record.clone()));
        self.check_win();

        record
    }

    fn check_win(&mut self) {
        if self.state.phase.is_won() {
            return;
        }

        if let Some(winner) = rules::winner(&self.state.players) {
            self.state.phase = Phase::Won(winner);
            self.state.timer.pause();

            let elapsed_secs = self.state.timer.elapsed_secs();
            info!(winner = %winner, elapsed_secs, moves = self.state.moves_played(), "game won");
            self.events.push(GameEvent::Won {
                winner,
                elapsed_secs,
                sound: self.config.sound_enabled,
            });
        }
    }

    // === Clock ===

    /// Count one second of play. No-op unless the game is active.
    pub fn tick(&mut self) {
        self.state.timer.tick();
    }

    /// Feed wall-clock time to the session timer.
    pub fn advance_clock(&mut self, dt: Duration) -> u64 {
        self.state.timer.advance(dt)
    }

    // === Reset ===

    /// Start over after a win.
    ///
    /// Ignored unless the game is won. Names and sound settings survive.
    #[instrument(skip(self), level = "debug")]
    pub fn reset(&mut self) -> bool {
        if !self.state.phase.is_won() {
            trace!(phase = ?self.state.phase, "ignored reset: game not won");
            return false;
        }

        self.state = GameState::new();
        self.events.push(GameEvent::Reset);
        debug!("session reset");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hop, ScriptedDice};

    fn engine(faces: &[u8]) -> TurnEngine<ScriptedDice> {
        TurnEngine::with_dice(GameConfig::new().instant(), ScriptedDice::new(faces.to_vec()))
    }

    /// Engine with the tokens moved to the given squares.
    fn engine_at(human: Square, computer: Square, faces: &[u8]) -> TurnEngine<ScriptedDice> {
        let mut engine = engine(faces);
        engine.state.players[Side::Human].position = human;
        engine.state.players[Side::Computer].position = computer;
        engine
    }

    #[test]
    fn test_first_roll_activates() {
        let mut engine = engine(&[2]);
        assert_eq!(engine.phase(), Phase::Idle);

        let pending = engine.request_roll(Side::Human).unwrap();

        assert_eq!(pending.value, 2);
        assert_eq!(engine.phase(), Phase::Active);
        assert!(engine.is_rolling());
        assert!(engine.state.timer.is_running());
        assert_eq!(engine.last_die(Side::Human), 2);
    }

    #[test]
    fn test_pending_roll_carries_delay() {
        let mut engine = TurnEngine::with_dice(GameConfig::new(), ScriptedDice::new([2]));

        let pending = engine.request_roll(Side::Human).unwrap();
        assert_eq!(pending.delay, Duration::from_millis(800));

        engine.complete_roll();
        let pending = engine.request_roll(Side::Computer).unwrap();
        assert_eq!(pending.delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_second_request_while_pending_is_ignored() {
        let mut engine = engine(&[2, 5]);

        engine.request_roll(Side::Human).unwrap();
        assert!(engine.request_roll(Side::Human).is_none());
        assert_eq!(engine.dice.rolls_drawn(), 1);
    }

    #[test]
    fn test_out_of_turn_is_ignored() {
        let mut engine = engine(&[2]);

        assert!(engine.request_roll(Side::Computer).is_none());
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_complete_without_pending() {
        let mut engine = engine(&[2]);
        assert!(engine.complete_roll().is_none());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_complete_passes_turn() {
        let mut engine = engine(&[2]);

        engine.request_roll(Side::Human);
        let record = engine.complete_roll().unwrap();

        assert_eq!(record.from, 1);
        assert_eq!(record.to, 3);
        assert_eq!(engine.turn(), Side::Computer);
        assert!(!engine.is_rolling());
        assert!(engine.computer_should_roll());
    }

    #[test]
    fn test_ladder_record() {
        let mut engine = engine(&[3]);
        let record = engine.roll(Side::Human).unwrap();

        assert_eq!(record.to, 14);
        assert_eq!(record.transition, Some(Hop::Ladder { from: 4, to: 14 }));
        assert!(record.message().contains('4'));
        assert!(record.message().contains("14"));
    }

    #[test]
    fn test_overshoot_records_stay() {
        let mut engine = engine_at(98, 1, &[5]);
        let record = engine.roll(Side::Human).unwrap();

        assert!(record.overshoot);
        assert_eq!(record.from, 98);
        assert_eq!(record.to, 98);
        assert_eq!(record.message(), "");
        assert_eq!(engine.position(Side::Human), 98);
        assert_eq!(engine.turn(), Side::Computer);
    }

    #[test]
    fn test_win_freezes_session() {
        let mut engine = engine_at(97, 1, &[3]);
        engine.roll(Side::Human).unwrap();

        assert_eq!(engine.phase(), Phase::Won(Side::Human));
        assert!(!engine.state.timer.is_running());
        assert!(!engine.computer_should_roll());
        assert!(engine.step_computer().is_none());
        assert!(engine.roll(Side::Computer).is_none());

        let result = engine.result().unwrap();
        assert_eq!(result.winner, Side::Human);
        assert_eq!(result.moves, 1);
    }

    #[test]
    fn test_timer_freezes_on_win() {
        let mut engine = engine_at(97, 1, &[3]);
        engine.request_roll(Side::Human);
        engine.tick();
        engine.advance_clock(Duration::from_secs(2));
        engine.complete_roll();

        engine.tick();
        engine.advance_clock(Duration::from_secs(5));
        assert_eq!(engine.elapsed_secs(), 3);
        assert_eq!(engine.clock(), "0:03");
    }

    #[test]
    fn test_events_in_order() {
        let mut engine = engine_at(97, 1, &[3]);
        engine.roll(Side::Human);

        let events = engine.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], GameEvent::DiceRolled { side: Side::Human, value: 3, sound: true }));
        assert!(matches!(&events[1], GameEvent::Moved(r) if r.to == 100));
        assert!(matches!(events[2], GameEvent::Won { winner: Side::Human, .. }));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_sound_setting_flows_into_events() {
        let mut engine = engine(&[2]);
        engine.set_sound_enabled(false);
        engine.roll(Side::Human);

        assert!(engine.drain_events().iter().all(|e| !e.wants_sound()));
    }

    #[test]
    fn test_reset_only_after_win() {
        let mut engine = engine(&[2]);
        engine.roll(Side::Human);

        assert!(!engine.reset());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_reset_after_win() {
        let mut engine = engine_at(97, 40, &[3]);
        engine.set_player_name("Ada");
        engine.roll(Side::Human);
        engine.drain_events();

        assert!(engine.reset());

        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.turn(), Side::Human);
        assert_eq!(engine.position(Side::Human), 1);
        assert_eq!(engine.position(Side::Computer), 1);
        assert!(engine.history().is_empty());
        assert_eq!(engine.elapsed_secs(), 0);
        assert_eq!(engine.last_die(Side::Human), 0);
        assert_eq!(engine.display_name(Side::Human), "Ada");
        assert_eq!(engine.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_winner_banner() {
        let mut engine = engine_at(1, 97, &[2, 3]);
        assert_eq!(engine.winner_banner(), None);

        engine.roll(Side::Human);
        engine.step_computer();

        assert_eq!(engine.winner_banner().as_deref(), Some("🤖 Computer Wins!"));
    }

    #[test]
    fn test_history_newest_first() {
        let mut engine = engine(&[2, 5]);
        engine.roll(Side::Human);
        engine.step_computer();

        let dice: Vec<_> = engine.history_newest_first().map(|r| r.die).collect();
        assert_eq!(dice, vec![5, 2]);
    }
}
