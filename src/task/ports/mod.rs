//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the ingestion and
//! query services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
