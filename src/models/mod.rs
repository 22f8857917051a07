//! Domain entities for launches, moon phases and cached charts.
//!
//! These models mirror what the ingestion layer persists: one
//! [`LaunchRecord`] per external launch id per year, the full set of
//! [`MoonPhaseEvent`]s the USNO reports for a year (four phases across
//! roughly twelve cycles, ~48 events), and one [`ChartCacheEntry`] per
//! (year, chart kind) pair.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ChartKind;

/// Outcome of a rocket launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchStatus {
    Success,
    Failure,
    Partial,
    Tbd,
}

impl LaunchStatus {
    /// Display label used in chart payloads.
    ///
    /// The mapping is total: every variant has a label, so formatting can
    /// never fail an aggregation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Partial => "Partial Success",
            Self::Tbd => "TBD",
        }
    }
}

/// Principal lunar phase as reported by the USNO phase API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl MoonPhase {
    /// Display label used in chart payloads.
    pub fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::FullMoon => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }

    /// Canonical ordering for chart rows: New Moon, First Quarter,
    /// Full Moon, Last Quarter.
    pub fn sort_order(self) -> u8 {
        match self {
            Self::NewMoon => 1,
            Self::FirstQuarter => 2,
            Self::FullMoon => 3,
            Self::LastQuarter => 4,
        }
    }

    /// Sort order for a display label. Labels outside the canonical set
    /// sort last rather than failing.
    pub fn label_sort_order(label: &str) -> u8 {
        match label {
            "New Moon" => 1,
            "First Quarter" => 2,
            "Full Moon" => 3,
            "Last Quarter" => 4,
            _ => 5,
        }
    }
}

/// A single rocket launch, as persisted by the ingestion layer.
///
/// Immutable once stored. `external_id` references the Launch Library 2
/// record the row was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub id: i64,
    /// Launch Library 2 id, if known.
    pub external_id: Option<String>,
    /// Mission / rocket display name.
    pub name: String,
    /// Launch date and time (UTC). Time-of-day matters for the
    /// nearest-phase resolution.
    pub launched_at: DateTime<Utc>,
    pub status: LaunchStatus,
    /// Agency name (e.g. SpaceX, NASA, ESA).
    pub agency: String,
    /// Rocket configuration name (e.g. Falcon 9, Soyuz).
    pub rocket_type: String,
    /// Reference to the temporally-nearest moon phase, if resolved.
    pub moon_phase_id: Option<i64>,
}

/// A single principal-phase event for one year.
///
/// Day granularity only; the USNO API reports the date of each phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonPhaseEvent {
    pub id: i64,
    pub phase: MoonPhase,
    pub date: NaiveDate,
    pub year: i32,
}

/// A cached chart payload for one (year, chart kind) pair.
///
/// Upsert semantics: at most one entry per key, overwritten on
/// recomputation, never expired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartCacheEntry {
    pub id: i64,
    pub year: i32,
    pub kind: ChartKind,
    /// Serialized chart DTO (JSON).
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

/// Abbreviated month names used for the timeline chart.
///
/// The table is injected configuration rather than a runtime-locale
/// lookup, so the aggregation stays portable and testable. Defaults to
/// German (de-DE) abbreviations, matching the original deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabels(pub [String; 12]);

impl MonthLabels {
    /// Label for a 1-based month number. Out-of-range input falls back to
    /// the number itself rather than panicking.
    pub fn label(&self, month: u32) -> String {
        match month {
            1..=12 => self.0[(month - 1) as usize].clone(),
            other => other.to_string(),
        }
    }
}

impl Default for MonthLabels {
    fn default() -> Self {
        Self([
            "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
        ]
        .map(String::from))
    }
}
