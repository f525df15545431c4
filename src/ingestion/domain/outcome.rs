//! Ingestion requests, outcomes and pipeline stages.

use super::{NormalizedTask, ParsedTaskCandidate};
use crate::task::domain::{ProjectId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingestion call: raw text plus the caller's context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionRequest {
    text: String,
    project_id: ProjectId,
    requester: UserId,
}

impl IngestionRequest {
    /// Creates a request. Text is validated by the orchestrator so that an
    /// empty text surfaces as a caller error from `ingest`.
    #[must_use]
    pub fn new(text: impl Into<String>, project_id: ProjectId, requester: UserId) -> Self {
        Self {
            text: text.into(),
            project_id,
            requester,
        }
    }

    /// Returns the raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the project context, passed through untouched.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the requesting user, the default assignee for stored tasks.
    #[must_use]
    pub const fn requester(&self) -> UserId {
        self.requester
    }
}

/// Stages of one ingestion call.
///
/// `Inferring → Validating → Resolving → Done`, with a single failure edge
/// from the first three stages to `Fallback → Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestionStage {
    /// Waiting for the completion service.
    Inferring,
    /// Normalizing candidate fields.
    Validating,
    /// Resolving the assignee fragment.
    Resolving,
    /// Synthesizing a plain task after a failure.
    Fallback,
    /// Finished.
    Done,
}

impl IngestionStage {
    /// Returns the stage name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inferring => "inferring",
            Self::Validating => "validating",
            Self::Resolving => "resolving",
            Self::Fallback => "fallback",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for IngestionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one ingestion call.
///
/// Carries both the trusted task and the candidate it came from, so callers
/// can show what was inferred next to what will be stored. `degraded` marks
/// tasks produced by the fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionOutcome {
    normalized_task: NormalizedTask,
    raw_candidate: Option<ParsedTaskCandidate>,
    degraded: bool,
    fallback_reason: Option<String>,
}

impl IngestionOutcome {
    /// Outcome of a successful inference.
    #[must_use]
    pub const fn inferred(normalized_task: NormalizedTask, candidate: ParsedTaskCandidate) -> Self {
        Self {
            normalized_task,
            raw_candidate: Some(candidate),
            degraded: false,
            fallback_reason: None,
        }
    }

    /// Outcome of the fallback path.
    #[must_use]
    pub fn degraded(normalized_task: NormalizedTask, reason: impl Into<String>) -> Self {
        Self {
            normalized_task,
            raw_candidate: None,
            degraded: true,
            fallback_reason: Some(reason.into()),
        }
    }

    /// Returns the normalized task.
    #[must_use]
    pub const fn normalized_task(&self) -> &NormalizedTask {
        &self.normalized_task
    }

    /// Returns the candidate the model produced, absent on the fallback path.
    #[must_use]
    pub const fn raw_candidate(&self) -> Option<&ParsedTaskCandidate> {
        self.raw_candidate.as_ref()
    }

    /// Returns whether the task came from the fallback path.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Returns why the fallback path was taken.
    #[must_use]
    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback_reason.as_deref()
    }
}
