//! Ingestion pipeline orchestration.

use super::{InferenceClient, InferenceUnavailable, TaskNormalizer, synthesize};
use crate::config::EngineConfig;
use crate::directory::ports::DirectoryLookup;
use crate::ingestion::{
    domain::{IngestionError, IngestionOutcome, IngestionRequest, IngestionStage},
    ports::CompletionService,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Drives one request from raw text to a normalized task.
///
/// Inference failures of any kind, and inference being switched off, route
/// to the fallback synthesizer, so the only error `ingest` returns is a
/// caller input error.
#[derive(Clone)]
pub struct IngestionOrchestrator<S, D, C>
where
    S: CompletionService,
    D: DirectoryLookup,
    C: Clock + Send + Sync,
{
    inference: InferenceClient<S, C>,
    normalizer: TaskNormalizer<D>,
    inference_enabled: bool,
}

impl<S, D, C> IngestionOrchestrator<S, D, C>
where
    S: CompletionService,
    D: DirectoryLookup,
    C: Clock + Send + Sync,
{
    /// Creates an orchestrator from its collaborators and the engine
    /// configuration.
    #[must_use]
    pub fn new(
        completion: Arc<S>,
        directory: Arc<D>,
        clock: Arc<C>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            inference: InferenceClient::new(
                completion,
                clock,
                config.timezone,
                config.inference.timeout,
            ),
            normalizer: TaskNormalizer::new(directory, config.timezone),
            inference_enabled: config.inference.enabled,
        }
    }

    /// Ingests one request.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::EmptyInput`] when the text is blank. No
    /// external call is made in that case.
    pub async fn ingest(
        &self,
        request: &IngestionRequest,
    ) -> Result<IngestionOutcome, IngestionError> {
        let text = request.text().trim();
        if text.is_empty() {
            return Err(IngestionError::EmptyInput);
        }

        if !self.inference_enabled {
            return Ok(Self::fall_back(text, &InferenceUnavailable::Disabled));
        }

        log_stage(IngestionStage::Inferring);
        let candidate = match self.inference.infer(text).await {
            Ok(candidate) => candidate,
            Err(reason) => return Ok(Self::fall_back(text, &reason)),
        };

        log_stage(IngestionStage::Validating);
        let validated = self.normalizer.validate_fields(&candidate, text);
        log_stage(IngestionStage::Resolving);
        let normalized = self.normalizer.resolve_assignee(validated, &candidate);
        log_stage(IngestionStage::Done);

        info!(
            project_id = %request.project_id(),
            priority = %normalized.priority(),
            has_due_date = normalized.due_date().is_some(),
            assigned = normalized.assignee_id().is_some(),
            "ingested task"
        );
        Ok(IngestionOutcome::inferred(normalized, candidate))
    }

    fn fall_back(text: &str, reason: &InferenceUnavailable) -> IngestionOutcome {
        log_stage(IngestionStage::Fallback);
        warn!(reason = %reason, "falling back to plain task synthesis");
        let outcome = IngestionOutcome::degraded(synthesize(text), reason.to_string());
        log_stage(IngestionStage::Done);
        outcome
    }
}

fn log_stage(stage: IngestionStage) {
    debug!(stage = %stage, "ingestion stage");
}
