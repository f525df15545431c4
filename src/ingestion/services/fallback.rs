//! Deterministic fallback task synthesis.

use crate::ingestion::domain::NormalizedTask;
use crate::task::domain::Priority;

/// Builds a task from raw text alone: the trimmed text as title, default
/// priority, no due date and no assignee.
///
/// Makes no external calls, so it is always available when inference is
/// not.
///
/// # Examples
///
/// ```
/// use tasksmith::ingestion::services::synthesize;
/// use tasksmith::task::domain::Priority;
///
/// let task = synthesize("  Buy milk ");
/// assert_eq!(task.title(), "Buy milk");
/// assert_eq!(task.priority(), Priority::P3);
/// assert!(task.due_date().is_none());
/// assert!(task.assignee_id().is_none());
/// ```
#[must_use]
pub fn synthesize(text: &str) -> NormalizedTask {
    NormalizedTask::new(text, Priority::P3)
}
