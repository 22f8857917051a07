//! Read-through/write-through helpers over the chart cache.
//!
//! The cache never fails a chart request: unreadable backends and corrupt
//! payloads degrade to a miss, and write failures are logged and
//! swallowed so the freshly computed result still reaches the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::api::ChartKind;
use crate::db::ChartCacheRepository;

/// Probe the cache for `(year, kind)` and deserialize the payload.
///
/// Returns `None` on a true miss, on a backend failure, and on a corrupt
/// payload; the latter two are logged so recomputation proceeds silently
/// from the caller's perspective.
pub async fn probe<T: DeserializeOwned>(
    cache: &dyn ChartCacheRepository,
    year: i32,
    kind: ChartKind,
) -> Option<T> {
    let payload = match cache.read_chart_cache(year, kind).await {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(e) => {
            warn!(year, kind = %kind, error = %e, "chart cache read failed, treating as miss");
            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(year, kind = %kind, error = %e, "corrupt chart cache payload, treating as miss");
            None
        }
    }
}

/// Serialize `value` and upsert it under `(year, kind)`.
///
/// Failures are logged and swallowed; the aggregation result is returned
/// to the caller regardless of whether it could be persisted.
pub async fn store<T: Serialize>(
    cache: &dyn ChartCacheRepository,
    year: i32,
    kind: ChartKind,
    value: &T,
) {
    let payload = match serde_json::to_string(value) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(year, kind = %kind, error = %e, "failed to serialize chart payload for cache");
            return;
        }
    };

    if let Err(e) = cache.write_chart_cache(year, kind, payload).await {
        warn!(year, kind = %kind, error = %e, "chart cache write failed, returning uncached result");
    }
}
