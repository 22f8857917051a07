use super::*;
use crate::db::{LaunchRepository, LocalRepository, MoonPhaseRepository, NewLaunch, NewMoonPhase};
use crate::models::MoonPhase;
use chrono::{NaiveDate, TimeZone, Utc};

fn phase(phase: MoonPhase, month: u32, day: u32) -> NewMoonPhase {
    NewMoonPhase {
        phase,
        date: NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
        year: 2025,
    }
}

fn launch(month: u32, day: u32, status: LaunchStatus) -> NewLaunch {
    NewLaunch {
        external_id: None,
        name: format!("launch-{}-{}", month, day),
        launched_at: Utc.with_ymd_and_hms(2025, month, day, 0, 0, 0).unwrap(),
        status,
        agency: "NASA".to_string(),
        rocket_type: "SLS".to_string(),
    }
}

async fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();
    repo.store_moon_phases(vec![
        phase(MoonPhase::NewMoon, 1, 6),
        phase(MoonPhase::FirstQuarter, 1, 13),
        phase(MoonPhase::FullMoon, 1, 21),
    ])
    .await
    .unwrap();
    repo
}

#[tokio::test]
async fn groups_by_nearest_phase_with_one_decimal_rate() {
    let repo = seeded_repo().await;
    // Three launches nearest to First Quarter (Jan 13), one success.
    repo.store_launches(vec![
        launch(1, 12, LaunchStatus::Success),
        launch(1, 13, LaunchStatus::Failure),
        launch(1, 14, LaunchStatus::Tbd),
        // One launch nearest to Full Moon, successful.
        launch(1, 21, LaunchStatus::Success),
    ])
    .await
    .unwrap();

    let chart = get_moon_phase_success(&repo, 2025).await.unwrap();
    assert_eq!(chart.chart_type, "bar");
    assert_eq!(chart.year, 2025);

    let quarter = chart
        .data
        .iter()
        .find(|r| r.moon_phase == "First Quarter")
        .unwrap();
    assert_eq!(quarter.total_launches, 3);
    assert_eq!(quarter.successful_launches, 1);
    assert_eq!(quarter.success_rate, 33.3);

    let full = chart.data.iter().find(|r| r.moon_phase == "Full Moon").unwrap();
    assert_eq!(full.success_rate, 100.0);
}

#[tokio::test]
async fn rows_follow_the_canonical_phase_order() {
    let repo = seeded_repo().await;
    // Populate Full Moon first, then New Moon; output must still lead
    // with New Moon.
    repo.store_launches(vec![
        launch(1, 20, LaunchStatus::Success),
        launch(1, 21, LaunchStatus::Success),
        launch(1, 22, LaunchStatus::Failure),
        launch(1, 5, LaunchStatus::Success),
        launch(1, 6, LaunchStatus::Failure),
    ])
    .await
    .unwrap();

    let chart = get_moon_phase_success(&repo, 2025).await.unwrap();
    let labels: Vec<&str> = chart.data.iter().map(|r| r.moon_phase.as_str()).collect();
    assert_eq!(labels, vec!["New Moon", "Full Moon"]);
}

#[tokio::test]
async fn empty_year_returns_uncached_empty_chart() {
    let repo = LocalRepository::new();
    let chart = get_moon_phase_success(&repo, 2025).await.unwrap();

    assert_eq!(chart.chart_type, "bar");
    assert_eq!(chart.year, 2025);
    assert!(chart.data.is_empty());
    assert_eq!(chart.title.as_deref(), Some("Erfolgsrate pro Mondphase"));
    // Empty results must not shadow a later successful ingest.
    assert_eq!(repo.chart_cache_len(), 0);
}

#[tokio::test]
async fn launches_without_phase_data_stay_empty_and_uncached() {
    let repo = LocalRepository::new();
    repo.store_launches(vec![launch(1, 12, LaunchStatus::Success)])
        .await
        .unwrap();

    let chart = get_moon_phase_success(&repo, 2025).await.unwrap();
    assert!(chart.data.is_empty());
    assert_eq!(repo.chart_cache_len(), 0);
}

#[tokio::test]
async fn second_call_is_served_from_cache() {
    let repo = seeded_repo().await;
    repo.store_launches(vec![launch(1, 12, LaunchStatus::Success)])
        .await
        .unwrap();

    let first = get_moon_phase_success(&repo, 2025).await.unwrap();
    assert_eq!(repo.chart_cache_len(), 1);

    // New data after the first computation is not reflected: there is no
    // invalidation path, the cached payload wins.
    repo.store_launches(vec![launch(1, 13, LaunchStatus::Failure)])
        .await
        .unwrap();
    let second = get_moon_phase_success(&repo, 2025).await.unwrap();
    assert_eq!(first, second);
}
