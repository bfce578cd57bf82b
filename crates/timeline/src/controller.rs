//! The timeline controller: one selection, one synchronization pass.

use jiff::civil::Date;
use jiff::{SignedDuration, Timestamp};
use tracing::debug;
use usdm_calendar::DateSequence;

use crate::debounce::Debouncer;
use crate::state::SelectionState;
use crate::views::{DateLabel, PickerView, RangeLabels, SliderView};

/// Quiet period applied to the slider's input stream.
pub const SLIDER_QUIET: SignedDuration = SignedDuration::from_millis(300);

/// Retrieves and renders the boundary dataset for a date.
///
/// Failures are the loader's to report and never roll back the selection:
/// a date handed to `load` was structurally valid (it came from the
/// sequence), only its remote artifact may be missing.
pub trait OverlayLoader {
    fn load(&mut self, date: Date);
}

/// Owns the immutable date sequence, the selection, every derived view, and
/// the overlay loader.
///
/// User events mutate the selection through [`SelectionState`]; an accepted
/// change triggers exactly one synchronization pass that rewrites the views
/// in a fixed order (slider, pickers, date label) and then invokes the
/// loader. Views are plain data, so a programmatic view update can never
/// re-fire the event that caused it. Re-selecting the already-loaded date
/// leaves the loader untouched.
#[derive(Debug)]
pub struct Timeline<L> {
    sequence: DateSequence,
    selection: SelectionState,
    slider: SliderView,
    picker: PickerView,
    date_label: DateLabel,
    range: RangeLabels,
    debouncer: Debouncer<usize>,
    loader: L,
    loaded: Option<usize>,
}

impl<L: OverlayLoader> Timeline<L> {
    /// Starts at the newest date and performs the initial load.
    pub fn new(sequence: DateSequence, loader: L) -> Self {
        let selection = SelectionState::new(&sequence);
        let initial = selection.date(&sequence);
        let mut timeline = Self {
            slider: SliderView::new(&sequence),
            picker: PickerView::new(&sequence, initial),
            date_label: DateLabel::new(initial),
            range: RangeLabels::new(&sequence),
            debouncer: Debouncer::new(SLIDER_QUIET),
            selection,
            sequence,
            loader,
            loaded: None,
        };
        timeline.synchronize();
        timeline
    }

    pub fn sequence(&self) -> &DateSequence {
        &self.sequence
    }

    pub fn current_index(&self) -> usize {
        self.selection.current()
    }

    pub fn current_date(&self) -> Date {
        self.selection.date(&self.sequence)
    }

    pub fn slider(&self) -> &SliderView {
        &self.slider
    }

    pub fn picker(&self) -> &PickerView {
        &self.picker
    }

    pub fn date_label(&self) -> &DateLabel {
        &self.date_label
    }

    pub fn range(&self) -> &RangeLabels {
        &self.range
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// Selects by index (clamped). Returns `true` when the selection moved.
    pub fn select_index(&mut self, index: usize) -> bool {
        if self.selection.select(&self.sequence, index) {
            self.synchronize();
            true
        } else {
            false
        }
    }

    /// Selects an exact date from the sequence; unknown dates are ignored.
    pub fn select_date(&mut self, date: Date) -> bool {
        if self.selection.select_date(&self.sequence, date) {
            self.synchronize();
            true
        } else {
            false
        }
    }

    /// Jumps to the newest date.
    pub fn newest(&mut self) -> bool {
        self.select_index(self.sequence.len() - 1)
    }

    /// Jumps to the oldest date.
    pub fn oldest(&mut self) -> bool {
        self.select_index(0)
    }

    /// Moves one week later in time.
    pub fn next(&mut self) -> bool {
        self.select_index(self.selection.current().saturating_add(1))
    }

    /// Moves one week earlier in time.
    pub fn prev(&mut self) -> bool {
        let index = self.selection.current();
        if index == 0 {
            return false;
        }
        self.select_index(index - 1)
    }

    /// Picks a year: cascades to the first available month and day of that
    /// year. A year not present in the sequence is ignored.
    pub fn pick_year(&mut self, year: i16) -> bool {
        let months = self.sequence.months_in(year);
        let Some(&month) = months.first() else {
            debug!(year, "ignoring pick of year not in sequence");
            return false;
        };
        self.pick_first_in(year, month)
    }

    /// Picks a month within the selected year: cascades to the first
    /// available day. A month with no dates in that year is ignored.
    pub fn pick_month(&mut self, month: i8) -> bool {
        let (year, _, _) = self.picker.selected();
        self.pick_first_in(year, month)
    }

    /// Picks an exact day within the selected year and month.
    pub fn pick_day(&mut self, day: i8) -> bool {
        let (year, month, _) = self.picker.selected();
        let Ok(date) = Date::new(year, month, day) else {
            debug!(year, month, day, "ignoring pick of invalid day");
            return false;
        };
        self.select_date(date)
    }

    fn pick_first_in(&mut self, year: i16, month: i8) -> bool {
        let dates = self.sequence.dates_in(year, month);
        let Some(&first) = dates.first() else {
            debug!(year, month, "ignoring pick of month not in sequence");
            return false;
        };
        self.select_date(first)
    }

    /// Feeds one slider value into the debouncer. Nothing is selected or
    /// loaded until [`poll`](Self::poll) observes the quiet period elapsed;
    /// each new value resets that period.
    pub fn slider_input(&mut self, value: usize, now: Timestamp) {
        self.debouncer.input(value, now);
    }

    /// Applies the trailing slider value once its quiet period has elapsed.
    /// Returns `true` when a selection change resulted.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        match self.debouncer.poll(now) {
            Some(value) => {
                let index = self.slider.index_for(value);
                self.select_index(index)
            }
            None => false,
        }
    }

    /// Deadline of a pending slider value, if any.
    pub fn pending_deadline(&self) -> Option<Timestamp> {
        self.debouncer.deadline()
    }

    /// Rewrites every view from the selection, then loads the overlay for
    /// the selected date unless it is already the loaded one.
    fn synchronize(&mut self) {
        let index = self.selection.current();
        let date = self.selection.date(&self.sequence);
        self.slider.set_from_index(index);
        self.picker.set_from_date(&self.sequence, date);
        self.date_label.set(date);
        if self.loaded != Some(index) {
            debug!(%date, index, "loading overlay for selection");
            self.loader.load(date);
            self.loaded = Some(index);
        }
    }
}
