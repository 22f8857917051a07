//! Data Transfer Objects for chart responses.
//!
//! These shapes are the wire format consumed by the React frontend and are
//! also the persisted cache representation: a cached chart is the JSON
//! serialization of one of these DTOs, and it must round-trip losslessly.
//! Field names are camelCase to match the frontend types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which aggregation a cache entry or result belongs to.
///
/// The string forms double as cache-key tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Bar chart: success rate per moon phase.
    MoonPhaseSuccess,
    /// Pie chart: launch-status distribution.
    LaunchStatus,
    /// Line chart: launches per month.
    LaunchTimeline,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MoonPhaseSuccess => "moon-phase-success",
            Self::LaunchStatus => "launch-status",
            Self::LaunchTimeline => "launch-timeline",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moon-phase-success" => Ok(Self::MoonPhaseSuccess),
            "launch-status" => Ok(Self::LaunchStatus),
            "launch-timeline" => Ok(Self::LaunchTimeline),
            other => Err(format!("Unknown chart kind: {}", other)),
        }
    }
}

/// One bar of the success-rate chart: launches grouped by their nearest
/// moon phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseSuccessRate {
    /// Phase display label (e.g. "New Moon", "Full Moon").
    pub moon_phase: String,
    /// Success rate in percent, 0-100, one decimal place.
    pub success_rate: f64,
    pub total_launches: usize,
    pub successful_launches: usize,
}

/// Bar chart: success rate per moon phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseSuccessChart {
    /// Always "bar".
    pub chart_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub year: i32,
    pub data: Vec<MoonPhaseSuccessRate>,
}

/// One slice of the status-distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchStatusSlice {
    /// Status display label (e.g. "Success", "Partial Success").
    pub status: String,
    pub count: usize,
    /// Share of all launches in percent, one decimal place.
    pub percentage: f64,
}

/// Pie chart: distribution of launches by status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchStatusChart {
    /// Always "pie".
    pub chart_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub year: i32,
    pub data: Vec<LaunchStatusSlice>,
}

/// One point of the timeline chart. There is always exactly one point per
/// calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchTimelinePoint {
    /// Abbreviated month name in the configured locale.
    pub month: String,
    /// 1-12, ascending.
    pub month_number: u32,
    pub launch_count: usize,
}

/// Line chart: launches per month across one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchTimelineChart {
    /// Always "line".
    pub chart_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub year: i32,
    pub data: Vec<LaunchTimelinePoint>,
}
