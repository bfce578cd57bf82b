//! # usdm-calendar
//!
//! Weekly release-date sequences on the proleptic Gregorian civil calendar.
//!
//! The U.S. Drought Monitor labels every map with a Tuesday date. This crate
//! builds the ordered, immutable sequence of those label dates: align an
//! anchor date forward to the release weekday, then step by exactly seven
//! civil days through an inclusive upper bound. All arithmetic counts civil
//! days, never wall-clock hours, so time zones and DST cannot introduce
//! off-by-one drift here.
//!
//! ## Quick Start
//!
//! ```
//! use jiff::civil::{Weekday, date};
//! use usdm_calendar::DateSequence;
//!
//! let sequence = DateSequence::generate(
//!     date(2000, 1, 1),
//!     date(2000, 2, 1),
//!     Weekday::Tuesday,
//! ).unwrap();
//! assert_eq!(sequence.len(), 5);
//! assert_eq!(sequence.first(), date(2000, 1, 4));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sequence` | [`DateSequence`] and weekly date generation |
//! | `error` | Error types |

mod error;
mod sequence;

pub use error::CalendarError;
pub use sequence::{DateSequence, align_to_weekday, weekly_dates};
