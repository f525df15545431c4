//! Service that answers filtered task list queries.

use super::{FilterCompiler, order_tasks};
use crate::config::EngineConfig;
use crate::query::domain::{FilterParams, FilterParamsError, FilterSpec};
use crate::task::{
    domain::{ProjectId, Task},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task queries.
#[derive(Debug, Error)]
pub enum TaskQueryError {
    /// Raw filter parameters were invalid.
    #[error(transparent)]
    Filter(#[from] FilterParamsError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task queries.
pub type TaskQueryResult<T> = Result<T, TaskQueryError>;

/// Filters and orders a project's tasks.
#[derive(Clone)]
pub struct TaskQueryService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    compiler: FilterCompiler,
}

impl<R, C> TaskQueryService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a query service using the configured timezone for day
    /// boundaries.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, config: &EngineConfig) -> Self {
        Self {
            repository,
            clock,
            compiler: FilterCompiler::new(config.timezone),
        }
    }

    /// Returns the project's tasks matching `spec`, in canonical order.
    ///
    /// "Now" is read from the clock once per query, so every bucket in the
    /// query agrees on it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Repository`] when the tasks cannot be read.
    pub async fn query(
        &self,
        project_id: ProjectId,
        spec: &FilterSpec,
    ) -> TaskQueryResult<Vec<Task>> {
        let now = self.clock.utc();
        let predicate = self.compiler.compile(spec, now);
        let tasks = self.repository.list_by_project(project_id).await?;
        let total = tasks.len();

        let matches: Vec<Task> = tasks
            .into_iter()
            .filter(|task| predicate.matches(task))
            .collect();
        debug!(
            project_id = %project_id,
            total,
            matched = matches.len(),
            clauses = predicate.clauses().len(),
            "filtered project tasks"
        );
        Ok(order_tasks(matches))
    }

    /// Builds a spec from raw parameters and runs [`Self::query`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Filter`] for invalid parameters and
    /// [`TaskQueryError::Repository`] when the tasks cannot be read.
    pub async fn query_params(
        &self,
        project_id: ProjectId,
        params: FilterParams,
    ) -> TaskQueryResult<Vec<Task>> {
        let spec = FilterSpec::from_params(params)?;
        self.query(project_id, &spec).await
    }
}
