//! Trailing-edge debouncing driven by explicit timestamps.

use jiff::{SignedDuration, Timestamp};

/// Holds the most recent input value until a quiet period elapses.
///
/// Every [`input`](Self::input) replaces the pending value and resets the
/// deadline (reset, not queued): a rapid stream yields only its trailing
/// value, and superseded intermediates are dropped without ever firing.
/// Deterministic because the clock is supplied by the caller.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: SignedDuration,
    pending: Option<(T, Timestamp)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: SignedDuration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records `value` at `now`, replacing any pending value and restarting
    /// the quiet period.
    pub fn input(&mut self, value: T, now: Timestamp) {
        self.pending = Some((value, now + self.quiet));
    }

    /// Yields the pending value once the quiet period has elapsed. Returns
    /// `None` while the deadline is still in the future or nothing is
    /// pending.
    pub fn poll(&mut self, now: Timestamp) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Timestamp> {
        self.pending.as_ref().map(|&(_, deadline)| deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
