//! Success rate per moon phase (bar chart).

use std::collections::HashMap;

use tracing::{info, warn};

use crate::api::{ChartKind, MoonPhaseSuccessChart, MoonPhaseSuccessRate};
use crate::db::{FullRepository, RepositoryResult};
use crate::models::{LaunchStatus, MoonPhase};
use crate::services::nearest_phase::resolve_phase;
use crate::services::{cache, round_percent};

const TITLE: &str = "Erfolgsrate pro Mondphase";

/// Compute the success rate of launches grouped by their nearest moon
/// phase for one year.
///
/// Read-through cached under `(year, "moon-phase-success")`. An empty
/// result (no launches or no phase data for the year) is returned but not
/// cached, so a later successful ingest is not shadowed by a stale empty
/// payload.
pub async fn get_moon_phase_success(
    repo: &dyn FullRepository,
    year: i32,
) -> RepositoryResult<MoonPhaseSuccessChart> {
    if let Some(cached) = cache::probe(repo, year, ChartKind::MoonPhaseSuccess).await {
        return Ok(cached);
    }

    let launches = repo.launches_for_year(year).await?;
    let phases = repo.moon_phases_for_year(year).await?;

    if launches.is_empty() || phases.is_empty() {
        warn!(
            year,
            launches = launches.len(),
            moon_phases = phases.len(),
            "no data for moon-phase success chart"
        );
        return Ok(empty_chart(year));
    }

    // Group launches by their resolved phase: (total, successful).
    let mut groups: HashMap<MoonPhase, (usize, usize)> = HashMap::new();
    for launch in &launches {
        let phase = resolve_phase(launch.launched_at, &phases);
        let entry = groups.entry(phase).or_insert((0, 0));
        entry.0 += 1;
        if launch.status == LaunchStatus::Success {
            entry.1 += 1;
        }
    }

    let mut data: Vec<(MoonPhase, MoonPhaseSuccessRate)> = groups
        .into_iter()
        .map(|(phase, (total, successful))| {
            (
                phase,
                MoonPhaseSuccessRate {
                    moon_phase: phase.label().to_string(),
                    success_rate: success_rate(successful, total),
                    total_launches: total,
                    successful_launches: successful,
                },
            )
        })
        .collect();
    data.sort_by_key(|(phase, _)| phase.sort_order());

    let chart = MoonPhaseSuccessChart {
        chart_type: "bar".to_string(),
        title: Some(TITLE.to_string()),
        year,
        data: data.into_iter().map(|(_, row)| row).collect(),
    };

    info!(year, groups = chart.data.len(), "moon-phase success chart computed");
    cache::store(repo, year, ChartKind::MoonPhaseSuccess, &chart).await;

    Ok(chart)
}

fn empty_chart(year: i32) -> MoonPhaseSuccessChart {
    MoonPhaseSuccessChart {
        chart_type: "bar".to_string(),
        title: Some(TITLE.to_string()),
        year,
        data: Vec::new(),
    }
}

/// Success rate in percent, one decimal place. Zero when the group is
/// empty.
fn success_rate(successful: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_percent(successful as f64 / total as f64 * 100.0)
}

#[cfg(test)]
#[path = "moon_phase_success_tests.rs"]
mod tests;
