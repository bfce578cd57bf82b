//! Weekly date sequence generation.

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};

use crate::error::CalendarError;

/// Advances `anchor` forward to the first date on or after it that falls on
/// `weekday`. The anchor itself is returned when it already matches.
pub fn align_to_weekday(anchor: Date, weekday: Weekday) -> Result<Date, CalendarError> {
    let ahead = weekday.since(anchor.weekday());
    anchor
        .checked_add((ahead as i32).days())
        .map_err(|_| CalendarError::OutOfRange { date: anchor })
}

/// Enumerates every `weekday` date from the aligned anchor through `last`
/// inclusive, spaced exactly seven civil days apart.
///
/// The result is strictly increasing and deterministic. It is empty exactly
/// when `last` precedes the aligned anchor.
pub fn weekly_dates(
    anchor: Date,
    last: Date,
    weekday: Weekday,
) -> Result<Vec<Date>, CalendarError> {
    let mut current = align_to_weekday(anchor, weekday)?;
    let mut dates = Vec::new();
    while current <= last {
        dates.push(current);
        current = current
            .checked_add(7.days())
            .map_err(|_| CalendarError::OutOfRange { date: current })?;
    }
    Ok(dates)
}

/// An ordered, immutable sequence of release dates.
///
/// Invariants, guaranteed by construction:
/// - non-empty
/// - strictly increasing with exact 7-day spacing
/// - every element falls on the same weekday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSequence {
    dates: Vec<Date>,
}

impl DateSequence {
    /// Builds the sequence of `weekday` dates from `anchor` (aligned forward)
    /// through `last` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyRange`] when `last` precedes the aligned
    /// anchor, and [`CalendarError::OutOfRange`] when the civil date range is
    /// exceeded.
    pub fn generate(anchor: Date, last: Date, weekday: Weekday) -> Result<Self, CalendarError> {
        let dates = weekly_dates(anchor, last, weekday)?;
        if dates.is_empty() {
            return Err(CalendarError::EmptyRange {
                anchor,
                last,
                weekday,
            });
        }
        Ok(Self { dates })
    }

    /// Number of dates in the sequence. Always at least 1.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the date at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Date> {
        self.dates.get(index).copied()
    }

    /// The earliest date in the sequence.
    pub fn first(&self) -> Date {
        self.dates[0]
    }

    /// The latest date in the sequence.
    pub fn last(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Exact membership lookup. Dates are never synthesized by callers; a
    /// date not present in the sequence yields `None`.
    pub fn position(&self, date: Date) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    /// Iterates over the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// The dates as a slice, ascending.
    pub fn as_slice(&self) -> &[Date] {
        &self.dates
    }

    /// Distinct years present in the sequence, newest first.
    pub fn years(&self) -> Vec<i16> {
        let mut years: Vec<i16> = self.dates.iter().map(|d| d.year()).collect();
        years.dedup();
        years.reverse();
        years
    }

    /// Distinct months present for `year`, ascending. Empty when the year is
    /// not present.
    pub fn months_in(&self, year: i16) -> Vec<i8> {
        let mut months: Vec<i8> = self
            .dates
            .iter()
            .filter(|d| d.year() == year)
            .map(|d| d.month())
            .collect();
        months.dedup();
        months
    }

    /// Dates present for `year` and `month`, ascending.
    pub fn dates_in(&self, year: i16, month: i8) -> Vec<Date> {
        self.dates
            .iter()
            .filter(|d| d.year() == year && d.month() == month)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn align_already_on_weekday() {
        let tuesday = date(2000, 1, 4);
        assert_eq!(
            align_to_weekday(tuesday, Weekday::Tuesday).unwrap(),
            tuesday
        );
    }

    #[test]
    fn align_advances_forward() {
        // 2000-01-01 is a Saturday; the next Tuesday is Jan 4.
        assert_eq!(
            align_to_weekday(date(2000, 1, 1), Weekday::Tuesday).unwrap(),
            date(2000, 1, 4)
        );
        // Wednesday anchor wraps six days forward, never backward.
        assert_eq!(
            align_to_weekday(date(2000, 1, 5), Weekday::Tuesday).unwrap(),
            date(2000, 1, 11)
        );
    }

    #[test]
    fn weekly_dates_empty_when_last_precedes_aligned_anchor() {
        let dates = weekly_dates(date(2000, 1, 1), date(2000, 1, 3), Weekday::Tuesday).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn weekly_dates_includes_last_when_aligned() {
        let dates = weekly_dates(date(2000, 1, 4), date(2000, 1, 18), Weekday::Tuesday).unwrap();
        assert_eq!(
            dates,
            vec![date(2000, 1, 4), date(2000, 1, 11), date(2000, 1, 18)]
        );
    }

    #[test]
    fn generate_rejects_empty_range() {
        let err = DateSequence::generate(date(2000, 1, 1), date(2000, 1, 3), Weekday::Tuesday)
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::EmptyRange {
                anchor: date(2000, 1, 1),
                last: date(2000, 1, 3),
                weekday: Weekday::Tuesday,
            }
        );
    }

    #[test]
    fn generate_single_element() {
        let seq =
            DateSequence::generate(date(2000, 1, 4), date(2000, 1, 4), Weekday::Tuesday).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.first(), seq.last());
    }

    #[test]
    fn position_exact_membership_only() {
        let seq =
            DateSequence::generate(date(2000, 1, 4), date(2000, 2, 1), Weekday::Tuesday).unwrap();
        assert_eq!(seq.position(date(2000, 1, 11)), Some(1));
        // A Wednesday between two elements is not a member.
        assert_eq!(seq.position(date(2000, 1, 12)), None);
    }

    #[test]
    fn years_newest_first() {
        let seq =
            DateSequence::generate(date(1999, 12, 20), date(2001, 1, 10), Weekday::Tuesday)
                .unwrap();
        assert_eq!(seq.years(), vec![2001, 2000, 1999]);
    }

    #[test]
    fn months_ascending_within_year() {
        let seq =
            DateSequence::generate(date(2000, 11, 1), date(2001, 2, 28), Weekday::Tuesday).unwrap();
        assert_eq!(seq.months_in(2000), vec![11, 12]);
        assert_eq!(seq.months_in(2001), vec![1, 2]);
        assert!(seq.months_in(1999).is_empty());
    }

    #[test]
    fn dates_in_month_ascending() {
        let seq =
            DateSequence::generate(date(2000, 1, 1), date(2000, 3, 1), Weekday::Tuesday).unwrap();
        // 2000 is a leap year and Feb 29 lands on a Tuesday.
        assert_eq!(
            seq.dates_in(2000, 2),
            vec![
                date(2000, 2, 1),
                date(2000, 2, 8),
                date(2000, 2, 15),
                date(2000, 2, 22),
                date(2000, 2, 29),
            ]
        );
        assert!(seq.dates_in(2000, 4).is_empty());
    }
}
