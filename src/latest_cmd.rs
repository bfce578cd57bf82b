//! Latest command: resolve the newest published release date.

use anyhow::{Context, Result};
use jiff::Timestamp;

use usdm_schedule::AvailabilitySchedule;

use crate::cli::LatestArgs;

pub fn run(args: LatestArgs) -> Result<()> {
    let schedule =
        AvailabilitySchedule::us_drought_monitor().context("failed to build schedule")?;
    let now = args.now.unwrap_or_else(Timestamp::now);
    let latest = schedule
        .latest_available(now)
        .context("failed to resolve latest available release")?;
    println!("{latest}");
    Ok(())
}
