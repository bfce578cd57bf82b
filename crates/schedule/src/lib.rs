//! # usdm-schedule
//!
//! The fixed weekly publication schedule of the U.S. Drought Monitor and the
//! resolution of the latest available release date.
//!
//! Maps are labeled with a Tuesday date but published two days later, at
//! 09:00 on Thursday in US Eastern time. Resolving "latest available" from an
//! instant therefore needs the Eastern UTC offset in effect on the *cutoff's
//! own calendar date*; the tz database carries the DST transition table, so
//! no offset is ever derived heuristically.
//!
//! ```no_run
//! use jiff::Timestamp;
//! use usdm_schedule::AvailabilitySchedule;
//!
//! let schedule = AvailabilitySchedule::us_drought_monitor()?;
//! let latest = schedule.latest_available(Timestamp::now())?;
//! # Ok::<(), usdm_schedule::ScheduleError>(())
//! ```

mod error;
mod schedule;

pub use error::ScheduleError;
pub use schedule::{AvailabilitySchedule, EPOCH, FALLBACK_RELEASE};
