//! Error types for the usdm-schedule crate.

use jiff::civil::Date;

/// Error type for all fallible operations in the usdm-schedule crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when the reference time zone cannot be loaded from the tz
    /// database.
    #[error("time zone '{name}' not available: {reason}")]
    TimeZone {
        /// IANA name of the time zone that was requested.
        name: String,
        /// Description of the underlying tz database failure.
        reason: String,
    },

    /// Returned when schedule arithmetic leaves the supported date range.
    #[error("schedule arithmetic out of range near {date}")]
    OutOfRange {
        /// The date at which the arithmetic failed.
        date: Date,
    },
}
