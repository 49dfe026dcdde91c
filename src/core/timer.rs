//! Whole-second session timer.
//!
//! The timer counts only while running. Drivers either call `tick()` once
//! per second or feed wall-clock time through `advance()`, which carries
//! sub-second remainders between calls.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTimer {
    elapsed_secs: u64,
    running: bool,
    carry: Duration,
}

impl SessionTimer {
    /// A stopped timer at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting. Elapsed time is kept.
    pub fn pause(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    /// Stop and zero the timer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Count one second if running.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_secs += 1;
        }
    }

    /// Feed wall-clock time. Returns the number of whole seconds counted.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if !self.running {
            return 0;
        }

        self.carry += dt;
        let mut ticks = 0;
        while self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            self.elapsed_secs += 1;
            ticks += 1;
        }
        ticks
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn format(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Format seconds as `m:ss`.
///
/// ```
/// use snakes_ladders::core::format_clock;
///
/// assert_eq!(format_clock(0), "0:00");
/// assert_eq!(format_clock(75), "1:15");
/// ```
#[must_use]
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_ignores_ticks() {
        let mut timer = SessionTimer::new();
        timer.tick();
        assert_eq!(timer.advance(Duration::from_secs(5)), 0);
        assert_eq!(timer.elapsed_secs(), 0);
    }

    #[test]
    fn test_tick_while_running() {
        let mut timer = SessionTimer::new();
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed_secs(), 2);
    }

    #[test]
    fn test_pause_freezes() {
        let mut timer = SessionTimer::new();
        timer.start();
        timer.tick();
        timer.pause();
        timer.tick();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_secs(), 1);
    }

    #[test]
    fn test_advance_carries_remainder() {
        let mut timer = SessionTimer::new();
        timer.start();

        assert_eq!(timer.advance(Duration::from_millis(700)), 0);
        assert_eq!(timer.advance(Duration::from_millis(700)), 1);
        assert_eq!(timer.advance(Duration::from_millis(2600)), 3);
        assert_eq!(timer.elapsed_secs(), 4);
    }

    #[test]
    fn test_reset() {
        let mut timer = SessionTimer::new();
        timer.start();
        timer.advance(Duration::from_secs(61));
        assert_eq!(timer.format(), "1:01");

        timer.reset();
        assert_eq!(timer, SessionTimer::new());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(600), "10:00");
    }
}
