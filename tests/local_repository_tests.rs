//! Expanded tests for LocalRepository.
//!
//! These tests cover concurrent access patterns and the cache upsert
//! guarantee for the in-memory repository implementation.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use romo_rust::api::ChartKind;
use romo_rust::db::{ChartCacheRepository, LaunchRepository, LocalRepository, NewLaunch};
use romo_rust::models::LaunchStatus;

fn test_launch(name: &str, year: i32) -> NewLaunch {
    NewLaunch {
        external_id: Some(format!("ll2-{}", name)),
        name: name.to_string(),
        launched_at: Utc.with_ymd_and_hms(year, 4, 1, 8, 0, 0).unwrap(),
        status: LaunchStatus::Success,
        agency: "Rocket Lab".to_string(),
        rocket_type: "Electron".to_string(),
    }
}

// =========================================================
// Concurrent Access Tests
// =========================================================

#[tokio::test]
async fn concurrent_writes_to_different_years() {
    let repo = Arc::new(LocalRepository::new());

    let mut handles = vec![];
    for i in 0..10 {
        let repo_clone = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let year = 2015 + i;
            repo_clone
                .store_launches(vec![test_launch(&format!("launch_{}", i), year)])
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    for i in 0..10 {
        assert!(repo.has_launches_for_year(2015 + i).await.unwrap());
    }
}

#[tokio::test]
async fn concurrent_cache_writes_to_same_key_leave_one_entry() {
    let repo = Arc::new(LocalRepository::new());

    // Two requests for the same (year, kind) may both miss and both
    // write; last writer wins and the entry count stays at one.
    let mut handles = vec![];
    for i in 0..8 {
        let repo_clone = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo_clone
                .write_chart_cache(2025, ChartKind::LaunchTimeline, format!("payload-{}", i))
                .await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(repo.chart_cache_len(), 1);
    let stored = repo
        .read_chart_cache(2025, ChartKind::LaunchTimeline)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.starts_with("payload-"));
}

// =========================================================
// Cache Upsert Guarantee
// =========================================================

#[tokio::test]
async fn sequential_upserts_keep_the_latest_payload() {
    let repo = LocalRepository::new();

    repo.write_chart_cache(2025, ChartKind::LaunchStatus, "resultA".to_string())
        .await
        .unwrap();
    repo.write_chart_cache(2025, ChartKind::LaunchStatus, "resultB".to_string())
        .await
        .unwrap();

    assert_eq!(repo.chart_cache_len(), 1);
    assert_eq!(
        repo.read_chart_cache(2025, ChartKind::LaunchStatus)
            .await
            .unwrap()
            .as_deref(),
        Some("resultB")
    );
}

#[tokio::test]
async fn cache_keys_are_scoped_by_year_and_kind() {
    let repo = LocalRepository::new();

    repo.write_chart_cache(2024, ChartKind::LaunchStatus, "a".to_string())
        .await
        .unwrap();
    repo.write_chart_cache(2025, ChartKind::LaunchStatus, "b".to_string())
        .await
        .unwrap();
    repo.write_chart_cache(2025, ChartKind::MoonPhaseSuccess, "c".to_string())
        .await
        .unwrap();

    assert_eq!(repo.chart_cache_len(), 3);
    assert_eq!(
        repo.read_chart_cache(2024, ChartKind::LaunchStatus)
            .await
            .unwrap()
            .as_deref(),
        Some("a")
    );
    assert_eq!(
        repo.read_chart_cache(2025, ChartKind::MoonPhaseSuccess)
            .await
            .unwrap()
            .as_deref(),
        Some("c")
    );
}
