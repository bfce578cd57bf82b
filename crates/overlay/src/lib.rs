//! # usdm-overlay
//!
//! Retrieval and decoding of U.S. Drought Monitor boundary datasets.
//!
//! Each release is published as a GeoJSON feature collection at a URL derived
//! from the label date. Features carry a `DM` severity code (−1 none through
//! 4 exceptional drought); this crate decodes the payload, maps codes to
//! [`DmCategory`], and adapts the blocking HTTP fetch to the timeline's
//! `OverlayLoader` seam. A failed fetch clears the downstream sink and is
//! logged, never retried, and never rolls back the selection.

mod category;
mod client;
mod data;
mod error;
mod loader;

pub use category::DmCategory;
pub use client::{HttpOverlayClient, dataset_url};
pub use data::{OverlayData, OverlayFeature};
pub use error::OverlayError;
pub use loader::{FetchingLoader, OverlaySink};
