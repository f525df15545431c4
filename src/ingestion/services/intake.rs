//! Service that ingests task text and stores the result.

use super::IngestionOrchestrator;
use crate::directory::ports::DirectoryLookup;
use crate::ingestion::{
    domain::{IngestionError, IngestionOutcome, IngestionRequest},
    ports::CompletionService,
};
use crate::task::{
    domain::{NewTask, Task, TaskDomainError},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for text intake.
#[derive(Debug, Error)]
pub enum TaskIntakeError {
    /// The request was rejected before ingestion.
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for intake operations.
pub type TaskIntakeResult<T> = Result<T, TaskIntakeError>;

/// A stored task together with the ingestion outcome it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedTask {
    task: Task,
    outcome: IngestionOutcome,
}

impl IngestedTask {
    /// Returns the stored task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the ingestion outcome.
    #[must_use]
    pub const fn outcome(&self) -> &IngestionOutcome {
        &self.outcome
    }

    /// Splits into the stored task and the outcome.
    #[must_use]
    pub fn into_parts(self) -> (Task, IngestionOutcome) {
        (self.task, self.outcome)
    }
}

/// Creates stored tasks from free-form text.
#[derive(Clone)]
pub struct TaskIntakeService<R, S, D, C>
where
    R: TaskRepository,
    S: CompletionService,
    D: DirectoryLookup,
    C: Clock + Send + Sync,
{
    orchestrator: IngestionOrchestrator<S, D, C>,
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, S, D, C> TaskIntakeService<R, S, D, C>
where
    R: TaskRepository,
    S: CompletionService,
    D: DirectoryLookup,
    C: Clock + Send + Sync,
{
    /// Creates a new intake service.
    #[must_use]
    pub const fn new(
        orchestrator: IngestionOrchestrator<S, D, C>,
        repository: Arc<R>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            orchestrator,
            repository,
            clock,
        }
    }

    /// Ingests `request` and stores the resulting task.
    ///
    /// The task is assigned to the resolved assignee, or to the requester
    /// when none was resolved, and records the requester as its creator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Ingestion`] for blank text and
    /// [`TaskIntakeError::Repository`] when the store rejects the task.
    pub async fn create_from_text(
        &self,
        request: &IngestionRequest,
    ) -> TaskIntakeResult<IngestedTask> {
        let outcome = self.orchestrator.ingest(request).await?;
        let normalized = outcome.normalized_task();

        let mut data = NewTask::new(request.project_id(), normalized.title(), request.requester())
            .with_priority(normalized.priority())
            .with_assignee(normalized.assignee_id().unwrap_or(request.requester()));
        if let Some(due_date) = normalized.due_date() {
            data = data.with_due_date(due_date);
        }

        let task = Task::new(data, &*self.clock)?;
        self.repository.store(&task).await?;
        info!(
            task_id = %task.id(),
            degraded = outcome.is_degraded(),
            "stored ingested task"
        );
        Ok(IngestedTask { task, outcome })
    }
}
