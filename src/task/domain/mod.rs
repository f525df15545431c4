//! Domain model shared by the ingestion pipeline and the query engine.
//!
//! The task domain fixes the vocabulary both halves agree on: four-level
//! priorities, offset-qualified due instants, directory identities for
//! assignees, and the stored task record.

mod due;
mod error;
mod ids;
mod priority;
mod task;

pub use due::{NO_DUE_DATE_LABEL, format_due_for_display, parse_due_date, start_of_local_day};
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{ProjectId, TaskId, UserId};
pub use priority::Priority;
pub use task::{NewTask, PersistedTaskData, Task, TaskUpdate};
