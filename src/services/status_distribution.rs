//! Launch-status distribution (pie chart).

use std::collections::HashMap;

use tracing::{info, warn};

use crate::api::{ChartKind, LaunchStatusChart, LaunchStatusSlice};
use crate::db::{FullRepository, RepositoryResult};
use crate::models::LaunchStatus;
use crate::services::{cache, round_percent};

const TITLE: &str = "Launch-Status Verteilung";

/// Compute the distribution of launches by status for one year.
///
/// Read-through cached under `(year, "launch-status")`. A year with no
/// launches yields an empty result that is not cached.
pub async fn get_launch_status_distribution(
    repo: &dyn FullRepository,
    year: i32,
) -> RepositoryResult<LaunchStatusChart> {
    if let Some(cached) = cache::probe(repo, year, ChartKind::LaunchStatus).await {
        return Ok(cached);
    }

    let launches = repo.launches_for_year(year).await?;

    if launches.is_empty() {
        warn!(year, "no launches for status distribution chart");
        return Ok(LaunchStatusChart {
            chart_type: "pie".to_string(),
            title: Some(TITLE.to_string()),
            year,
            data: Vec::new(),
        });
    }

    let total = launches.len();
    let mut groups: HashMap<LaunchStatus, usize> = HashMap::new();
    for launch in &launches {
        *groups.entry(launch.status).or_insert(0) += 1;
    }

    let mut data: Vec<LaunchStatusSlice> = groups
        .into_iter()
        .map(|(status, count)| LaunchStatusSlice {
            status: status.label().to_string(),
            count,
            percentage: round_percent(count as f64 / total as f64 * 100.0),
        })
        .collect();
    // Largest slice first; ties keep whatever order grouping yielded.
    data.sort_by(|a, b| b.count.cmp(&a.count));

    let chart = LaunchStatusChart {
        chart_type: "pie".to_string(),
        title: Some(TITLE.to_string()),
        year,
        data,
    };

    info!(year, total, "launch-status distribution computed");
    cache::store(repo, year, ChartKind::LaunchStatus, &chart).await;

    Ok(chart)
}
