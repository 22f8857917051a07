//! Service layer for chart aggregation and orchestration.
//!
//! This module contains the aggregation logic between the repository layer
//! and the HTTP handlers: the nearest-phase resolver, the three chart
//! computations, and the read-through cache helpers they share. All
//! services take the repository handle as an explicit parameter.

pub mod cache;

pub mod moon_phase_success;

pub mod nearest_phase;

pub mod status_distribution;
pub mod timeline;

pub use moon_phase_success::get_moon_phase_success;
pub use nearest_phase::{nearest_phase_event, resolve_phase};
pub use status_distribution::get_launch_status_distribution;
pub use timeline::get_launch_timeline;

/// Round a percentage to one decimal place. The one-decimal contract is
/// the only precision guarantee the charts make.
pub(crate) fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
