//! Fetch command: retrieve and summarize one boundary dataset.

use anyhow::{Context, Result, bail};
use jiff::Timestamp;
use tracing::info;

use usdm_calendar::DateSequence;
use usdm_overlay::{HttpOverlayClient, OverlayData};
use usdm_schedule::AvailabilitySchedule;

use crate::cli::FetchArgs;

pub fn run(args: FetchArgs) -> Result<()> {
    let schedule =
        AvailabilitySchedule::us_drought_monitor().context("failed to build schedule")?;
    let now = args.now.unwrap_or_else(Timestamp::now);
    let latest = schedule
        .latest_available(now)
        .context("failed to resolve latest available release")?;
    let sequence = DateSequence::generate(schedule.epoch(), latest, schedule.release_weekday())
        .context("failed to generate release sequence")?;

    let date = args.date.unwrap_or(latest);
    if sequence.position(date).is_none() {
        bail!(
            "{date} is not a release date (releases run {} through {}, weekly on {:?})",
            sequence.first(),
            sequence.last(),
            schedule.release_weekday(),
        );
    }

    let client = HttpOverlayClient::new();
    let raw = client
        .fetch_raw(date)
        .with_context(|| format!("failed to fetch boundary dataset for {date}"))?;
    let data = OverlayData::from_json(&raw)
        .with_context(|| format!("failed to decode boundary dataset for {date}"))?;

    println!("Date: {date}");
    println!("Features: {}", data.len());
    for (category, count) in data.category_counts() {
        println!("  D{:<2} {:<20} {count}", category.code(), category.label());
    }
    if data.unclassified_count() > 0 {
        println!("  ?   {:<20} {}", "Unclassified", data.unclassified_count());
    }

    if let Some(path) = args.output {
        std::fs::write(&path, &raw)
            .with_context(|| format!("failed to write payload to {}", path.display()))?;
        info!(path = %path.display(), bytes = raw.len(), "payload written");
    }
    Ok(())
}
