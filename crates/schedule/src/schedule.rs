//! The weekly availability schedule and latest-available resolution.

use jiff::civil::{Date, Time, Weekday, date, time};
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};
use tracing::{debug, warn};

use crate::error::ScheduleError;

/// First map week of the U.S. Drought Monitor archive.
pub const EPOCH: Date = date(2000, 1, 4);

/// Last release date of the hardcoded minimum schedule window, used to fail
/// closed when the wall clock cannot be read. A Tuesday.
pub const FALLBACK_RELEASE: Date = date(2023, 12, 26);

/// IANA name of the reference time zone the cutoff is defined in.
const REFERENCE_TZ: &str = "America/New_York";

/// The fixed weekly publication rule: maps labeled with a release weekday,
/// published at a cutoff time-of-day a fixed number of days later, in a fixed
/// reference time zone. Immutable for the session.
#[derive(Debug, Clone)]
pub struct AvailabilitySchedule {
    release_weekday: Weekday,
    publish_delay_days: i32,
    cutoff: Time,
    tz: TimeZone,
}

impl AvailabilitySchedule {
    /// The U.S. Drought Monitor schedule: Tuesday labels, published Thursday
    /// 09:00 US Eastern.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::TimeZone`] when the reference zone cannot be
    /// loaded from the tz database.
    pub fn us_drought_monitor() -> Result<Self, ScheduleError> {
        let tz = TimeZone::get(REFERENCE_TZ).map_err(|e| ScheduleError::TimeZone {
            name: REFERENCE_TZ.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            release_weekday: Weekday::Tuesday,
            publish_delay_days: 2,
            cutoff: time(9, 0, 0, 0),
            tz,
        })
    }

    /// The weekday every release is labeled with.
    pub fn release_weekday(&self) -> Weekday {
        self.release_weekday
    }

    /// The earliest release date in the archive.
    pub fn epoch(&self) -> Date {
        EPOCH
    }

    /// The reference time zone the cutoff is defined in.
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// Resolves the most recent release date whose dataset has been published
    /// as of `now`.
    ///
    /// The most recent release weekday on or before `now`'s civil date in the
    /// reference zone is the candidate. Its dataset appears at the cutoff
    /// time on the candidate's own publication day, resolved through the tz
    /// database so the UTC offset is the one in effect on that date. Strictly
    /// before the cutoff instant the candidate is not yet available and the
    /// previous week's release is returned; at or after, the candidate
    /// itself.
    pub fn latest_available(&self, now: Timestamp) -> Result<Date, ScheduleError> {
        let today = now.to_zoned(self.tz.clone()).date();
        let behind = today.weekday().since(self.release_weekday);
        let candidate = today
            .checked_sub((behind as i32).days())
            .map_err(|_| ScheduleError::OutOfRange { date: today })?;
        let publish_day = candidate
            .checked_add(self.publish_delay_days.days())
            .map_err(|_| ScheduleError::OutOfRange { date: candidate })?;
        let cutoff = publish_day
            .to_datetime(self.cutoff)
            .to_zoned(self.tz.clone())
            .map_err(|_| ScheduleError::OutOfRange { date: publish_day })?
            .timestamp();

        let latest = if now < cutoff {
            candidate
                .checked_sub(7.days())
                .map_err(|_| ScheduleError::OutOfRange { date: candidate })?
        } else {
            candidate
        };
        debug!(%today, %candidate, %cutoff, %latest, "resolved latest available release");
        Ok(latest)
    }

    /// [`latest_available`](Self::latest_available) with the ClockAnomaly
    /// policy: when the clock is unavailable or resolution fails, fail closed
    /// to [`FALLBACK_RELEASE`].
    pub fn latest_available_or_fallback(&self, now: Option<Timestamp>) -> Date {
        match now.map(|ts| self.latest_available(ts)) {
            Some(Ok(latest)) => latest,
            Some(Err(e)) => {
                warn!(error = %e, "availability resolution failed; using fallback window");
                FALLBACK_RELEASE
            }
            None => {
                warn!("wall clock unavailable; using fallback window");
                FALLBACK_RELEASE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> AvailabilitySchedule {
        AvailabilitySchedule::us_drought_monitor().unwrap()
    }

    fn resolve(now: &str) -> Date {
        schedule()
            .latest_available(now.parse::<Timestamp>().unwrap())
            .unwrap()
    }

    #[test]
    fn epoch_is_release_weekday() {
        assert_eq!(EPOCH.weekday(), Weekday::Tuesday);
        assert_eq!(FALLBACK_RELEASE.weekday(), Weekday::Tuesday);
    }

    #[test]
    fn monday_resolves_previous_week() {
        // Monday 2024-01-08 noon ET: the Jan 2 release was published Jan 4.
        assert_eq!(resolve("2024-01-08T17:00:00Z"), date(2024, 1, 2));
    }

    #[test]
    fn tuesday_label_not_yet_published() {
        // Tuesday 2024-01-09 itself: its dataset appears Thursday Jan 11.
        assert_eq!(resolve("2024-01-09T15:00:00Z"), date(2024, 1, 2));
    }

    #[test]
    fn friday_after_publication_resolves_current_week() {
        // Friday 2024-01-12: Jan 9 was published the day before.
        assert_eq!(resolve("2024-01-12T12:00:00Z"), date(2024, 1, 9));
    }

    #[test]
    fn fallback_used_without_clock() {
        assert_eq!(
            schedule().latest_available_or_fallback(None),
            FALLBACK_RELEASE
        );
    }

    #[test]
    fn fallback_passes_through_valid_clock() {
        let now = "2024-01-12T12:00:00Z".parse::<Timestamp>().unwrap();
        assert_eq!(
            schedule().latest_available_or_fallback(Some(now)),
            date(2024, 1, 9)
        );
    }
}
