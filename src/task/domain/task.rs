//! Stored task record.

use super::{Priority, ProjectId, TaskDomainError, TaskId, UserId};
use chrono::{DateTime, FixedOffset, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task record as held by the task store.
///
/// The filter compiler and result orderer read `title`, `priority`,
/// `due_date`, `assignee_id`, `completed`, and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    priority: Priority,
    due_date: Option<DateTime<FixedOffset>>,
    assignee_id: Option<UserId>,
    created_by: UserId,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title; must not be blank.
    pub title: String,
    /// Task priority.
    pub priority: Priority,
    /// Due instant, if any.
    pub due_date: Option<DateTime<FixedOffset>>,
    /// Assigned user, if any.
    pub assignee_id: Option<UserId>,
    /// User that created the task.
    pub created_by: UserId,
}

impl NewTask {
    /// Creates a parameter object with default priority, no due date and no
    /// assignee.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>, created_by: UserId) -> Self {
        Self {
            project_id,
            title: title.into(),
            priority: Priority::default(),
            due_date: None,
            assignee_id: None,
            created_by,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due instant.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<FixedOffset>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }
}

/// Field changes applied to an existing task. Absent fields are left as
/// they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title; must not be blank.
    pub title: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement due instant; `Some(None)` clears it.
    pub due_date: Option<Option<DateTime<FixedOffset>>>,
    /// Replacement assignee; `Some(None)` unassigns the task.
    pub assignee_id: Option<Option<UserId>>,
}

impl TaskUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces or clears the due instant.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<FixedOffset>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces or clears the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: Option<UserId>) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted due instant.
    pub due_date: Option<DateTime<FixedOffset>>,
    /// Persisted assignee.
    pub assignee_id: Option<UserId>,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(data: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            project_id: data.project_id,
            title: title.to_owned(),
            priority: data.priority,
            due_date: data.due_date,
            assignee_id: data.assignee_id,
            created_by: data.created_by,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            priority: data.priority,
            due_date: data.due_date,
            assignee_id: data.assignee_id,
            created_by: data.created_by,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due instant, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<FixedOffset>> {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the task is incomplete and its due instant lies
    /// strictly before `now`. Completed tasks are never overdue.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    /// Applies field changes and refreshes the modification timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the replacement title is
    /// blank. The task is left unchanged in that case.
    pub fn apply_update(
        &mut self,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let TaskUpdate {
            title,
            priority,
            due_date,
            assignee_id,
        } = update;

        if let Some(raw) = title {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(TaskDomainError::EmptyTitle);
            }
            self.title = trimmed.to_owned();
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        if let Some(value) = assignee_id {
            self.assignee_id = value;
        }
        self.touch(clock);
        Ok(())
    }

    /// Marks the task complete or incomplete.
    pub fn set_completion(&mut self, completed: bool, clock: &impl Clock) {
        self.completed = completed;
        self.touch(clock);
    }

    /// Flips the completion flag.
    pub fn toggle_completion(&mut self, clock: &impl Clock) {
        self.set_completion(!self.completed, clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
