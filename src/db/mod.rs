//! Database module for launch and moon-phase data storage.
//!
//! This module provides abstractions for storage via the Repository
//! pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Aggregations + Cache       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The repository handle is injected explicitly: handlers receive it via
//! `AppState` and pass it into every service call. There is no ambient
//! global instance.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{
    ChartCacheRepository, ErrorContext, FullRepository, LaunchRepository, MoonPhaseRepository,
    NewLaunch, NewMoonPhase, RepositoryError, RepositoryResult,
};
