//! Dates command: print the full release-date sequence.

use anyhow::{Context, Result};
use jiff::Timestamp;
use tracing::info;

use usdm_calendar::DateSequence;
use usdm_schedule::AvailabilitySchedule;

use crate::cli::DatesArgs;

pub fn run(args: DatesArgs) -> Result<()> {
    let schedule =
        AvailabilitySchedule::us_drought_monitor().context("failed to build schedule")?;
    let now = args.now.unwrap_or_else(Timestamp::now);
    let latest = schedule
        .latest_available(now)
        .context("failed to resolve latest available release")?;
    let start = args.start.unwrap_or_else(|| schedule.epoch());

    let sequence = DateSequence::generate(start, latest, schedule.release_weekday())
        .context("failed to generate release sequence")?;
    info!(
        first = %sequence.first(),
        last = %sequence.last(),
        count = sequence.len(),
        "release sequence"
    );

    for date in sequence.iter() {
        println!("{date}");
    }
    Ok(())
}
