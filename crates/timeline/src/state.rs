//! The selected index, sole source of truth for the current date.

use jiff::civil::Date;
use tracing::debug;
use usdm_calendar::DateSequence;

/// Index of the currently selected date within a [`DateSequence`].
///
/// All controls derive from this index; none holds an independent date. The
/// two mutators report whether the selection actually moved so the caller
/// can run exactly one synchronization pass per accepted change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    index: usize,
}

impl SelectionState {
    /// Starts at the newest date in the sequence.
    pub fn new(sequence: &DateSequence) -> Self {
        Self {
            index: sequence.len() - 1,
        }
    }

    /// The selected index.
    pub fn current(&self) -> usize {
        self.index
    }

    /// The selected date.
    pub fn date(&self, sequence: &DateSequence) -> Date {
        // The index is clamped into range by every mutator.
        sequence
            .get(self.index)
            .expect("selection index is always within the sequence")
    }

    /// Selects `index`, clamped into the valid range. Returns `true` when the
    /// selection moved.
    pub fn select(&mut self, sequence: &DateSequence, index: usize) -> bool {
        let clamped = index.min(sequence.len() - 1);
        if clamped == self.index {
            return false;
        }
        self.index = clamped;
        true
    }

    /// Selects the exact `date` by membership lookup. A date not present in
    /// the sequence is a caller contract violation and is ignored.
    pub fn select_date(&mut self, sequence: &DateSequence, date: Date) -> bool {
        match sequence.position(date) {
            Some(index) => self.select(sequence, index),
            None => {
                debug!(%date, "ignoring selection of date not in sequence");
                false
            }
        }
    }
}
