//! Service layer for completion toggles, field updates and deletion of
//! stored tasks.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Marks a task complete or incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn set_completion(&self, id: TaskId, completed: bool) -> TaskLifecycleResult<Task> {
        self.modify(id, |task, clock| {
            task.set_completion(completed, clock);
            Ok(())
        })
        .await
    }

    /// Flips a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn toggle_completion(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.modify(id, |task, clock| {
            task.toggle_completion(clock);
            Ok(())
        })
        .await
    }

    /// Applies field changes to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the update is invalid,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskLifecycleResult<Task> {
        self.modify(id, move |task, clock| task.apply_update(update, clock))
            .await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        match self.repository.delete(id).await {
            Ok(()) => {
                debug!(task_id = %id, "deleted task");
                Ok(())
            }
            Err(TaskRepositoryError::NotFound(missing)) => {
                Err(TaskLifecycleError::NotFound(missing))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn modify<F>(&self, id: TaskId, change: F) -> TaskLifecycleResult<Task>
    where
        F: FnOnce(&mut Task, &C) -> Result<(), TaskDomainError> + Send,
    {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))?;
        change(&mut task, &*self.clock)?;
        self.repository.update(&task).await?;
        debug!(task_id = %id, completed = task.is_completed(), "updated task");
        Ok(task)
    }
}
