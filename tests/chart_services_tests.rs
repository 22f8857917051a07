//! End-to-end tests for the chart services against the in-memory
//! repository: cache behavior, aggregation invariants, and the
//! serialized payload contract.

use chrono::{NaiveDate, TimeZone, Utc};
use romo_rust::api::ChartKind;
use romo_rust::db::{
    ChartCacheRepository, LaunchRepository, LocalRepository, MoonPhaseRepository, NewLaunch,
    NewMoonPhase,
};
use romo_rust::models::{LaunchStatus, MonthLabels, MoonPhase};
use romo_rust::services;

fn launch(month: u32, day: u32, status: LaunchStatus) -> NewLaunch {
    NewLaunch {
        external_id: None,
        name: format!("launch-{:02}-{:02}", month, day),
        launched_at: Utc.with_ymd_and_hms(2025, month, day, 14, 30, 0).unwrap(),
        status,
        agency: "SpaceX".to_string(),
        rocket_type: "Falcon 9".to_string(),
    }
}

fn phase(phase: MoonPhase, month: u32, day: u32) -> NewMoonPhase {
    NewMoonPhase {
        phase,
        date: NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
        year: 2025,
    }
}

async fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();
    repo.store_moon_phases(vec![
        phase(MoonPhase::NewMoon, 1, 6),
        phase(MoonPhase::FirstQuarter, 1, 13),
        phase(MoonPhase::FullMoon, 1, 21),
        phase(MoonPhase::LastQuarter, 1, 29),
    ])
    .await
    .unwrap();
    repo.store_launches(vec![
        launch(1, 5, LaunchStatus::Success),
        launch(1, 7, LaunchStatus::Failure),
        launch(1, 13, LaunchStatus::Success),
        launch(1, 20, LaunchStatus::Success),
        launch(1, 21, LaunchStatus::Partial),
        launch(1, 29, LaunchStatus::Tbd),
    ])
    .await
    .unwrap();
    repo
}

// =========================================================
// Empty-year behavior
// =========================================================

#[tokio::test]
async fn empty_year_moon_phase_chart_is_well_formed_and_uncached() {
    let repo = LocalRepository::new();
    let chart = services::get_moon_phase_success(&repo, 2031).await.unwrap();

    assert_eq!(chart.chart_type, "bar");
    assert_eq!(chart.year, 2031);
    assert!(chart.data.is_empty());

    let cached = repo
        .read_chart_cache(2031, ChartKind::MoonPhaseSuccess)
        .await
        .unwrap();
    assert!(cached.is_none());
}

// =========================================================
// Aggregation invariants
// =========================================================

#[tokio::test]
async fn status_counts_sum_to_total_and_percentages_to_hundred() {
    let repo = seeded_repo().await;
    let chart = services::get_launch_status_distribution(&repo, 2025)
        .await
        .unwrap();

    let count_sum: usize = chart.data.iter().map(|s| s.count).sum();
    assert_eq!(count_sum, 6);

    let percent_sum: f64 = chart.data.iter().map(|s| s.percentage).sum();
    assert!(
        (percent_sum - 100.0).abs() <= 0.4,
        "percentages summed to {}",
        percent_sum
    );

    // Ordered by count descending.
    for pair in chart.data.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

#[tokio::test]
async fn timeline_always_has_twelve_ordered_rows() {
    for year in [2025, 2031] {
        let repo = seeded_repo().await;
        let labels = MonthLabels::default();
        let chart = services::get_launch_timeline(&repo, year, &labels)
            .await
            .unwrap();

        assert_eq!(chart.data.len(), 12);
        for (i, point) in chart.data.iter().enumerate() {
            assert_eq!(point.month_number, (i + 1) as u32);
        }
    }
}

#[tokio::test]
async fn moon_phase_rows_follow_canonical_order() {
    let repo = seeded_repo().await;
    let chart = services::get_moon_phase_success(&repo, 2025).await.unwrap();

    let order: Vec<u8> = chart
        .data
        .iter()
        .map(|r| MoonPhase::label_sort_order(&r.moon_phase))
        .collect();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted);

    let total: usize = chart.data.iter().map(|r| r.total_launches).sum();
    assert_eq!(total, 6);
}

#[tokio::test]
async fn one_of_three_successes_rounds_to_33_3() {
    let repo = LocalRepository::new();
    repo.store_moon_phases(vec![phase(MoonPhase::NewMoon, 1, 6)])
        .await
        .unwrap();
    repo.store_launches(vec![
        launch(1, 5, LaunchStatus::Success),
        launch(1, 6, LaunchStatus::Failure),
        launch(1, 7, LaunchStatus::Failure),
    ])
    .await
    .unwrap();

    let chart = services::get_moon_phase_success(&repo, 2025).await.unwrap();
    assert_eq!(chart.data.len(), 1);
    assert_eq!(chart.data[0].success_rate, 33.3);
}

// =========================================================
// Cache contract
// =========================================================

#[tokio::test]
async fn repeated_calls_return_byte_identical_payloads() {
    let repo = seeded_repo().await;
    let labels = MonthLabels::default();

    let first = services::get_launch_timeline(&repo, 2025, &labels)
        .await
        .unwrap();
    let second = services::get_launch_timeline(&repo, 2025, &labels)
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let first = services::get_launch_status_distribution(&repo, 2025)
        .await
        .unwrap();
    let second = services::get_launch_status_distribution(&repo, 2025)
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn cached_payload_round_trips_through_json() {
    let repo = seeded_repo().await;
    let chart = services::get_moon_phase_success(&repo, 2025).await.unwrap();

    let payload = repo
        .read_chart_cache(2025, ChartKind::MoonPhaseSuccess)
        .await
        .unwrap()
        .expect("non-empty result must be cached");
    let parsed: romo_rust::api::MoonPhaseSuccessChart = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed, chart);

    // camelCase field names on the wire.
    assert!(payload.contains("\"chartType\""));
    assert!(payload.contains("\"successRate\""));
}

#[tokio::test]
async fn corrupt_cache_entry_triggers_recomputation() {
    let repo = seeded_repo().await;
    repo.write_chart_cache(2025, ChartKind::LaunchStatus, "{broken".to_string())
        .await
        .unwrap();

    let chart = services::get_launch_status_distribution(&repo, 2025)
        .await
        .unwrap();
    assert!(!chart.data.is_empty());

    // Recomputation overwrote the corrupt payload.
    let payload = repo
        .read_chart_cache(2025, ChartKind::LaunchStatus)
        .await
        .unwrap()
        .unwrap();
    assert!(serde_json::from_str::<romo_rust::api::LaunchStatusChart>(&payload).is_ok());
}
