//! Trusted, normalized task description.

use crate::task::domain::{Priority, TaskDomainError, UserId};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Title used when neither the candidate nor the raw text carries one.
const UNTITLED: &str = "Untitled task";

/// Validated task fields ready for persistence.
///
/// Every field is within its domain: the title is never blank, the due
/// instant carries the target offset, and the assignee, when present, is an
/// identity the directory returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NormalizedTaskFields")]
pub struct NormalizedTask {
    title: String,
    due_date: Option<DateTime<FixedOffset>>,
    priority: Priority,
    assignee_id: Option<UserId>,
}

/// Unchecked wire form of [`NormalizedTask`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NormalizedTaskFields {
    title: String,
    due_date: Option<DateTime<FixedOffset>>,
    priority: Priority,
    assignee_id: Option<UserId>,
}

impl TryFrom<NormalizedTaskFields> for NormalizedTask {
    type Error = TaskDomainError;

    fn try_from(fields: NormalizedTaskFields) -> Result<Self, Self::Error> {
        let trimmed = fields.title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            due_date: fields.due_date,
            priority: fields.priority,
            assignee_id: fields.assignee_id,
        })
    }
}

impl NormalizedTask {
    /// Creates a normalized task with no due date and no assignee.
    ///
    /// The title is trimmed; a blank title is replaced by a placeholder so
    /// construction never fails.
    #[must_use]
    pub fn new(title: &str, priority: Priority) -> Self {
        let trimmed = title.trim();
        let resolved = if trimmed.is_empty() { UNTITLED } else { trimmed };
        Self {
            title: resolved.to_owned(),
            due_date: None,
            priority,
            assignee_id: None,
        }
    }

    /// Sets the due instant.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<FixedOffset>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: Option<UserId>) -> Self {
        self.assignee_id = assignee_id;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the due instant, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<FixedOffset>> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the resolved assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }
}
