//! Error types for the usdm-calendar crate.

use jiff::civil::{Date, Weekday};

/// Error type for all fallible operations in the usdm-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when no aligned date exists between the anchor and the upper
    /// bound, which would violate the non-empty sequence invariant.
    #[error("empty range: no {weekday:?} falls between {anchor} and {last}")]
    EmptyRange {
        /// The anchor date the alignment started from.
        anchor: Date,
        /// The inclusive upper bound.
        last: Date,
        /// The release weekday the anchor was aligned to.
        weekday: Weekday,
    },

    /// Returned when date arithmetic leaves the supported civil date range.
    #[error("date arithmetic out of range near {date}")]
    OutOfRange {
        /// The date at which the arithmetic failed.
        date: Date,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn error_empty_range_message() {
        let err = CalendarError::EmptyRange {
            anchor: date(2000, 1, 1),
            last: date(2000, 1, 2),
            weekday: Weekday::Tuesday,
        };
        assert_eq!(
            err.to_string(),
            "empty range: no Tuesday falls between 2000-01-01 and 2000-01-02"
        );
    }

    #[test]
    fn error_out_of_range_message() {
        let err = CalendarError::OutOfRange {
            date: date(9999, 12, 28),
        };
        assert_eq!(err.to_string(), "date arithmetic out of range near 9999-12-28");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
