//! Terminal rendering of a fetched boundary dataset.

use jiff::civil::Date;

use usdm_overlay::{OverlayData, OverlaySink};

/// Prints a severity summary per rendered dataset; "clearing" prints a note
/// so a failed fetch is visible without rolling back the controls.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl OverlaySink for TerminalSink {
    fn render(&mut self, date: Date, data: &OverlayData) {
        println!("overlay {date}: {} features", data.len());
        for (category, count) in data.category_counts() {
            println!("  D{:<2} {:<20} {count}", category.code(), category.label());
        }
        if data.unclassified_count() > 0 {
            println!("  ?   {:<20} {}", "Unclassified", data.unclassified_count());
        }
    }

    fn clear(&mut self) {
        println!("overlay cleared (no dataset rendered)");
    }
}
