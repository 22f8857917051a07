//! In-memory repository implementation.
//!
//! Used for unit testing and local development. State lives in
//! `parking_lot` locks, so the repository is cheap to clone behind an
//! `Arc` and safe for concurrent handlers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use parking_lot::RwLock;

use crate::api::ChartKind;
use crate::db::repository::{
    ChartCacheRepository, FullRepository, LaunchRepository, MoonPhaseRepository, NewLaunch,
    NewMoonPhase, RepositoryResult,
};
use crate::models::{ChartCacheEntry, LaunchRecord, MoonPhaseEvent};

/// In-memory repository backed by `RwLock`-protected collections.
#[derive(Default)]
pub struct LocalRepository {
    launches: RwLock<Vec<LaunchRecord>>,
    moon_phases: RwLock<Vec<MoonPhaseEvent>>,
    chart_cache: RwLock<HashMap<(i32, ChartKind), ChartCacheEntry>>,
    next_id: AtomicI64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Number of cache entries currently stored. Test hook.
    pub fn chart_cache_len(&self) -> usize {
        self.chart_cache.read().len()
    }
}

#[async_trait]
impl LaunchRepository for LocalRepository {
    async fn store_launches(&self, launches: Vec<NewLaunch>) -> RepositoryResult<Vec<LaunchRecord>> {
        let records: Vec<LaunchRecord> = launches
            .into_iter()
            .map(|l| LaunchRecord {
                id: self.allocate_id(),
                external_id: l.external_id,
                name: l.name,
                launched_at: l.launched_at,
                status: l.status,
                agency: l.agency,
                rocket_type: l.rocket_type,
                moon_phase_id: None,
            })
            .collect();

        self.launches.write().extend(records.iter().cloned());
        Ok(records)
    }

    async fn launches_for_year(&self, year: i32) -> RepositoryResult<Vec<LaunchRecord>> {
        let mut result: Vec<LaunchRecord> = self
            .launches
            .read()
            .iter()
            .filter(|l| l.launched_at.year() == year)
            .cloned()
            .collect();
        result.sort_by_key(|l| l.launched_at);
        Ok(result)
    }

    async fn has_launches_for_year(&self, year: i32) -> RepositoryResult<bool> {
        Ok(self
            .launches
            .read()
            .iter()
            .any(|l| l.launched_at.year() == year))
    }
}

#[async_trait]
impl MoonPhaseRepository for LocalRepository {
    async fn store_moon_phases(
        &self,
        phases: Vec<NewMoonPhase>,
    ) -> RepositoryResult<Vec<MoonPhaseEvent>> {
        let records: Vec<MoonPhaseEvent> = phases
            .into_iter()
            .map(|p| MoonPhaseEvent {
                id: self.allocate_id(),
                phase: p.phase,
                date: p.date,
                year: p.year,
            })
            .collect();

        self.moon_phases.write().extend(records.iter().cloned());
        Ok(records)
    }

    async fn moon_phases_for_year(&self, year: i32) -> RepositoryResult<Vec<MoonPhaseEvent>> {
        let mut result: Vec<MoonPhaseEvent> = self
            .moon_phases
            .read()
            .iter()
            .filter(|p| p.year == year)
            .cloned()
            .collect();
        result.sort_by_key(|p| p.date);
        Ok(result)
    }

    async fn has_moon_phases_for_year(&self, year: i32) -> RepositoryResult<bool> {
        Ok(self.moon_phases.read().iter().any(|p| p.year == year))
    }
}

#[async_trait]
impl ChartCacheRepository for LocalRepository {
    async fn read_chart_cache(
        &self,
        year: i32,
        kind: ChartKind,
    ) -> RepositoryResult<Option<String>> {
        Ok(self
            .chart_cache
            .read()
            .get(&(year, kind))
            .map(|entry| entry.payload.clone()))
    }

    async fn write_chart_cache(
        &self,
        year: i32,
        kind: ChartKind,
        payload: String,
    ) -> RepositoryResult<()> {
        let mut cache = self.chart_cache.write();
        // Upsert: the map key guarantees at most one entry per (year, kind).
        let entry = ChartCacheEntry {
            id: self.allocate_id(),
            year,
            kind,
            payload,
            created_at: Utc::now(),
        };
        cache.insert((year, kind), entry);
        Ok(())
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
