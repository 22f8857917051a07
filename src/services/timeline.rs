//! Launches per month (line chart).

use chrono::Datelike;
use tracing::info;

use crate::api::{ChartKind, LaunchTimelineChart, LaunchTimelinePoint};
use crate::db::{FullRepository, RepositoryResult};
use crate::models::MonthLabels;
use crate::services::cache;

const TITLE: &str = "Raketen-Starts pro Monat";

/// Count launches per calendar month for one year.
///
/// Always emits exactly 12 points, months 1 through 12, even when the
/// year has no launches. The 12-row skeleton is cached under
/// `(year, "launch-timeline")` regardless of whether all counts are zero.
pub async fn get_launch_timeline(
    repo: &dyn FullRepository,
    year: i32,
    month_labels: &MonthLabels,
) -> RepositoryResult<LaunchTimelineChart> {
    if let Some(cached) = cache::probe(repo, year, ChartKind::LaunchTimeline).await {
        return Ok(cached);
    }

    let launches = repo.launches_for_year(year).await?;

    let data: Vec<LaunchTimelinePoint> = (1..=12)
        .map(|month| LaunchTimelinePoint {
            month: month_labels.label(month),
            month_number: month,
            launch_count: launches
                .iter()
                .filter(|l| l.launched_at.month() == month)
                .count(),
        })
        .collect();

    let chart = LaunchTimelineChart {
        chart_type: "line".to_string(),
        title: Some(TITLE.to_string()),
        year,
        data,
    };

    info!(year, total = launches.len(), "launch timeline computed");
    cache::store(repo, year, ChartKind::LaunchTimeline, &chart).await;

    Ok(chart)
}
