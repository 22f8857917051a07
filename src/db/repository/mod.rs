//! Repository traits for launch, moon-phase and chart-cache storage.
//!
//! The traits split by entity so implementations and tests can depend on
//! the narrowest interface; [`FullRepository`] combines them for
//! application wiring.

use async_trait::async_trait;

use crate::api::ChartKind;
use crate::models::{LaunchRecord, MoonPhaseEvent};

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Input for storing a launch; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewLaunch {
    pub external_id: Option<String>,
    pub name: String,
    pub launched_at: chrono::DateTime<chrono::Utc>,
    pub status: crate::models::LaunchStatus,
    pub agency: String,
    pub rocket_type: String,
}

/// Input for storing a moon-phase event; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewMoonPhase {
    pub phase: crate::models::MoonPhase,
    pub date: chrono::NaiveDate,
    pub year: i32,
}

/// Repository trait for rocket-launch storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait LaunchRepository: Send + Sync {
    /// Store a batch of launches, returning the persisted records.
    ///
    /// Launches are immutable once stored; ingestion calls this at most
    /// once per year.
    async fn store_launches(&self, launches: Vec<NewLaunch>) -> RepositoryResult<Vec<LaunchRecord>>;

    /// Fetch all launches whose launch timestamp falls in `year`, ordered
    /// by launch date ascending.
    async fn launches_for_year(&self, year: i32) -> RepositoryResult<Vec<LaunchRecord>>;

    /// Check whether any launches are stored for `year`.
    async fn has_launches_for_year(&self, year: i32) -> RepositoryResult<bool>;
}

/// Repository trait for moon-phase storage.
#[async_trait]
pub trait MoonPhaseRepository: Send + Sync {
    /// Store a batch of phase events, returning the persisted records.
    async fn store_moon_phases(
        &self,
        phases: Vec<NewMoonPhase>,
    ) -> RepositoryResult<Vec<MoonPhaseEvent>>;

    /// Fetch all phase events for `year`, ordered by date ascending.
    async fn moon_phases_for_year(&self, year: i32) -> RepositoryResult<Vec<MoonPhaseEvent>>;

    /// Check whether any phase events are stored for `year`.
    async fn has_moon_phases_for_year(&self, year: i32) -> RepositoryResult<bool>;
}

/// Repository trait for the chart cache.
///
/// The cache is a permanent memoization layer: at most one entry per
/// (year, kind) pair, overwritten on recomputation, never expired. There
/// is no invalidation path; stale entries after re-ingestion are an
/// accepted tradeoff.
#[async_trait]
pub trait ChartCacheRepository: Send + Sync {
    /// Read the cached payload for `(year, kind)`, if present.
    async fn read_chart_cache(&self, year: i32, kind: ChartKind)
        -> RepositoryResult<Option<String>>;

    /// Upsert the cached payload for `(year, kind)`.
    async fn write_chart_cache(
        &self,
        year: i32,
        kind: ChartKind,
        payload: String,
    ) -> RepositoryResult<()>;
}

/// Combined repository interface for application wiring.
#[async_trait]
pub trait FullRepository:
    LaunchRepository + MoonPhaseRepository + ChartCacheRepository + Send + Sync
{
    /// Verify the storage backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
