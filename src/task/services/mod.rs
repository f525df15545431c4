//! Service layer for task lifecycle changes.

mod lifecycle;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
