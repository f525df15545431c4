//! Shared world state for task ingestion BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, now};
use rstest::fixture;
use tasksmith::{
    config::{EngineConfig, InferenceConfig},
    directory::adapters::InMemoryDirectory,
    ingestion::{
        adapters::ScriptedCompletionService,
        services::{IngestedTask, IngestionOrchestrator, TaskIntakeError, TaskIntakeService},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{ProjectId, UserId},
    },
};

/// Intake service type used by the BDD world.
pub type TestIntakeService = TaskIntakeService<
    InMemoryTaskRepository,
    ScriptedCompletionService,
    InMemoryDirectory,
    FixedClock,
>;

/// Identity of the user submitting text in every scenario.
pub const REQUESTER: UserId = UserId::new(1);

/// Scenario world for task ingestion behaviour tests.
pub struct IngestionWorld {
    pub completion: ScriptedCompletionService,
    pub directory: Arc<InMemoryDirectory>,
    pub repository: Arc<InMemoryTaskRepository>,
    pub config: EngineConfig,
    pub project: ProjectId,
    pub last_result: Option<Result<IngestedTask, TaskIntakeError>>,
}

impl IngestionWorld {
    /// Creates a world with an empty directory, store and model script.
    #[must_use]
    pub fn new() -> Self {
        Self {
            completion: ScriptedCompletionService::new(),
            directory: Arc::new(InMemoryDirectory::new()),
            repository: Arc::new(InMemoryTaskRepository::new()),
            config: EngineConfig::default(),
            project: ProjectId::new(),
            last_result: None,
        }
    }

    /// Switches inference off for later submissions.
    pub fn disable_inference(&mut self) {
        self.config.inference = InferenceConfig::disabled();
    }

    /// Wires an intake service over the world's collaborators.
    #[must_use]
    pub fn intake(&self) -> TestIntakeService {
        let clock = Arc::new(FixedClock(now()));
        let orchestrator = IngestionOrchestrator::new(
            Arc::new(self.completion.clone()),
            Arc::clone(&self.directory),
            Arc::clone(&clock),
            &self.config,
        );
        TaskIntakeService::new(orchestrator, Arc::clone(&self.repository), clock)
    }

    /// Returns the task stored by the last submission.
    ///
    /// # Errors
    ///
    /// Returns an error when nothing was submitted or the submission failed.
    pub fn ingested(&self) -> Result<&IngestedTask, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing submission result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected intake failure: {err}"))
    }
}

impl Default for IngestionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IngestionWorld {
    IngestionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
