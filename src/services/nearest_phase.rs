//! Nearest-phase resolution.
//!
//! Maps a launch timestamp to the moon-phase event closest in time within
//! the launch's year. The distance is fractional: launches carry a
//! time-of-day while phase events carry only a date, which is compared at
//! midnight UTC.

use chrono::{DateTime, Utc};

use crate::models::{MoonPhase, MoonPhaseEvent};

/// Find the phase event whose date minimizes the absolute time difference
/// to `launched_at`.
///
/// `phases` is expected in date order, as returned by the repository. When
/// two events are exactly equidistant, the earlier date wins: the scan
/// keeps the first minimum (strict `<`), which is deterministic over the
/// ordered input.
///
/// Returns `None` only when `phases` is empty.
pub fn nearest_phase_event(
    launched_at: DateTime<Utc>,
    phases: &[MoonPhaseEvent],
) -> Option<&MoonPhaseEvent> {
    let mut best: Option<(&MoonPhaseEvent, i64)> = None;

    for event in phases {
        let phase_midnight = event.date.and_hms_opt(0, 0, 0)?.and_utc();
        let distance = (launched_at - phase_midnight).num_seconds().abs();

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((event, distance)),
        }
    }

    best.map(|(event, _)| event)
}

/// Resolve the phase for a launch, falling back to `NewMoon` when no phase
/// events exist for the year. The fallback is not an error; callers treat
/// it as a regular grouping key.
pub fn resolve_phase(launched_at: DateTime<Utc>, phases: &[MoonPhaseEvent]) -> MoonPhase {
    nearest_phase_event(launched_at, phases)
        .map(|event| event.phase)
        .unwrap_or(MoonPhase::NewMoon)
}
