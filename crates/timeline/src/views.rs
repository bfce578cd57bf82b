//! View state derived from the selection.
//!
//! Each view mirrors the selected index or date. They are rewritten wholesale
//! by the controller's synchronization pass and expose read accessors plus
//! the pure value/index mappings the controller applies to incoming events.

use jiff::civil::Date;
use usdm_calendar::DateSequence;

/// Slider state with the reversed timeline convention: value 0 is the
/// rightmost position and always denotes the newest date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderView {
    max: usize,
    value: usize,
}

impl SliderView {
    pub fn new(sequence: &DateSequence) -> Self {
        Self {
            max: sequence.len() - 1,
            value: 0,
        }
    }

    /// Largest selectable value (`len - 1`).
    pub fn max(&self) -> usize {
        self.max
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Mirrors a selection index: `value = max - index`.
    pub fn set_from_index(&mut self, index: usize) {
        self.value = self.max - index.min(self.max);
    }

    /// Maps an incoming slider value to a selection index, clamping values
    /// past the end of the range.
    pub fn index_for(&self, value: usize) -> usize {
        self.max - value.min(self.max)
    }
}

/// Hierarchical year/month/day picker state.
///
/// The year list covers the whole sequence (newest first); the month list
/// only the selected year; the day list only the selected year and month. The
/// three selected components always reconstruct a date that is present in the
/// sequence, never a stale one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    years: Vec<i16>,
    months: Vec<i8>,
    days: Vec<Date>,
    selected: Date,
}

impl PickerView {
    pub fn new(sequence: &DateSequence, selected: Date) -> Self {
        let mut view = Self {
            years: sequence.years(),
            months: Vec::new(),
            days: Vec::new(),
            selected,
        };
        view.set_from_date(sequence, selected);
        view
    }

    /// Repopulates the dependent month and day lists for `date` and selects
    /// its components. `date` must be a member of the sequence.
    pub fn set_from_date(&mut self, sequence: &DateSequence, date: Date) {
        self.months = sequence.months_in(date.year());
        self.days = sequence.dates_in(date.year(), date.month());
        self.selected = date;
    }

    /// Distinct years in the sequence, newest first.
    pub fn years(&self) -> &[i16] {
        &self.years
    }

    /// Months available within the selected year, ascending.
    pub fn months(&self) -> &[i8] {
        &self.months
    }

    /// Dates available within the selected year and month, ascending.
    pub fn days(&self) -> &[Date] {
        &self.days
    }

    /// The selected (year, month, day) components.
    pub fn selected(&self) -> (i16, i8, i8) {
        (
            self.selected.year(),
            self.selected.month(),
            self.selected.day(),
        )
    }

    /// The selected date reconstructed from the picker.
    pub fn selected_date(&self) -> Date {
        self.selected
    }
}

/// Human-readable rendering of the selected date, e.g. "2023 March 07".
/// Updated synchronously on every selection change, independent of the
/// overlay fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLabel {
    text: String,
}

impl DateLabel {
    pub fn new(date: Date) -> Self {
        let mut label = Self {
            text: String::new(),
        };
        label.set(date);
        label
    }

    pub fn set(&mut self, date: Date) {
        self.text = date.strftime("%Y %B %d").to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// First and last years of the sequence, set once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLabels {
    first_year: i16,
    last_year: i16,
}

impl RangeLabels {
    pub fn new(sequence: &DateSequence) -> Self {
        Self {
            first_year: sequence.first().year(),
            last_year: sequence.last().year(),
        }
    }

    pub fn first_year(&self) -> i16 {
        self.first_year
    }

    pub fn last_year(&self) -> i16 {
        self.last_year
    }
}
