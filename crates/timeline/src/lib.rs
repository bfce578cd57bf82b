//! # usdm-timeline
//!
//! Single-source-of-truth selection over a release-date sequence, with the
//! slider, year/month/day pickers, and overlay load kept consistent by one
//! synchronization pass.
//!
//! The selected index is the only mutable state. Every control is a view
//! derived from it: the [`Timeline`] controller applies a user event to
//! [`SelectionState`], then rewrites all views in a fixed order and invokes
//! the [`OverlayLoader`] at most once. Views are plain data and cannot
//! re-enter the event methods, so programmatic updates can never echo back as
//! fresh input.
//!
//! Slider drags arrive as a high-frequency value stream and are debounced:
//! only the trailing value after a quiet period triggers a selection and a
//! load. Picker changes are discrete and take effect immediately.

mod controller;
mod debounce;
mod state;
mod views;

pub use controller::{OverlayLoader, SLIDER_QUIET, Timeline};
pub use debounce::Debouncer;
pub use state::SelectionState;
pub use views::{DateLabel, PickerView, RangeLabels, SliderView};
