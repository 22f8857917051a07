//! Clients for the external data providers.
//!
//! Two upstream APIs feed the raw data store:
//!
//! - Launch Library 2 (`ll.thespacedevs.com`) for rocket launches
//! - USNO (`aa.usno.navy.mil`) for principal moon phases
//!
//! Both clients fetch per year and are idempotent: when the repository
//! already holds data for the requested year, the fetch is skipped and the
//! stored records are returned unchanged.

pub mod launches;
pub mod moon;

pub use launches::LaunchClient;
pub use moon::MoonDataClient;

use crate::db::RepositoryError;

/// Errors that can occur during ingestion.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// HTTP request or response decoding failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Storing fetched records failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
