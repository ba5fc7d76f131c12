//! Cosmetic timers for the TUI
//!
//! Timers never touch the engine directly: when one expires the app issues the
//! matching `dismiss_*` command. Every method takes `now` so tests need no clock.

use super::reveal;
use std::time::{Duration, Instant};

/// How long tiles shake after a mistake
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// How long confetti falls after a solve
pub const CONFETTI_DURATION: Duration = Duration::from_millis(3000);

/// Flags whose timers ran out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub shake: bool,
    pub confetti: bool,
}

/// Pending deadlines, invalidated together on reset
#[derive(Debug, Default, Clone)]
pub struct Timers {
    shake_until: Option<Instant>,
    confetti_until: Option<Instant>,
    completed_at: Option<Instant>,
}

impl Timers {
    /// (Re)start the shake timer
    pub fn start_shake(&mut self, now: Instant) {
        self.shake_until = Some(now + SHAKE_DURATION);
    }

    /// (Re)start the confetti timer
    pub fn start_confetti(&mut self, now: Instant) {
        self.confetti_until = Some(now + CONFETTI_DURATION);
    }

    /// Start the reveal clock; later calls keep the first completion time
    pub fn mark_complete(&mut self, now: Instant) {
        self.completed_at.get_or_insert(now);
    }

    /// Remove and report every timer that has expired by `now`
    pub fn take_expired(&mut self, now: Instant) -> Expired {
        Expired {
            shake: self.shake_until.take_if(|until| *until <= now).is_some(),
            confetti: self.confetti_until.take_if(|until| *until <= now).is_some(),
        }
    }

    /// Time left on the confetti timer
    #[must_use]
    pub fn confetti_left(&self, now: Instant) -> Option<Duration> {
        self.confetti_until.map(|until| until.saturating_duration_since(now))
    }

    /// Time since completion, if the puzzle is complete
    #[must_use]
    pub fn reveal_elapsed(&self, now: Instant) -> Option<Duration> {
        self.completed_at.map(|at| now.saturating_duration_since(at))
    }

    /// How long the event loop may block before some timer needs attention
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let reveal = self
            .reveal_elapsed(now)
            .and_then(reveal::until_next_step);

        [self.shake_until, self.confetti_until]
            .into_iter()
            .flatten()
            .map(|until| until.saturating_duration_since(now))
            .chain(reveal)
            .min()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
