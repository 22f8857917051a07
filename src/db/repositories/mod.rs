//! Repository implementations module.
//!
//! Currently a single implementation: `local`, an in-memory backend used
//! for tests and local development. The repository traits keep the door
//! open for a database-backed implementation.
pub mod local;

pub use local::LocalRepository;
