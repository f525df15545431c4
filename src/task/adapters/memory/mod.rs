//! In-memory adapters for tests and local, deterministic flows.

mod task;

pub use task::InMemoryTaskRepository;
