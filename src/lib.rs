//! Tasksmith: natural-language task intake and task list querying.
//!
//! This crate turns free-form task descriptions ("Finish landing page by
//! tomorrow 5pm P2, assign to John") into structured task records, and
//! slices a project's task list by search text, priority, assignee,
//! completion, and due-date buckets.
//!
//! # Architecture
//!
//! Tasksmith follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Process-wide engine configuration
//! - [`task`]: Shared task vocabulary and the task store port
//! - [`directory`]: User directory lookup and assignee resolution
//! - [`ingestion`]: Text-to-task ingestion pipeline with deterministic fallback
//! - [`query`]: Filter compilation and canonical result ordering

pub mod config;
pub mod directory;
pub mod ingestion;
pub mod query;
pub mod task;
