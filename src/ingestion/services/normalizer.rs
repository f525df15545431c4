//! Task field validation and normalization.

use crate::directory::{ports::DirectoryLookup, services::AssigneeResolver};
use crate::ingestion::domain::{NormalizedTask, ParsedTaskCandidate, infer_priority};
use crate::task::domain::parse_due_date;
use chrono::FixedOffset;
use std::sync::Arc;

/// Turns an untrusted candidate into a [`NormalizedTask`].
///
/// Normalization is total: every candidate shape, including an empty one,
/// yields a valid task.
#[derive(Clone)]
pub struct TaskNormalizer<D>
where
    D: DirectoryLookup,
{
    resolver: AssigneeResolver<D>,
    timezone: FixedOffset,
}

impl<D> TaskNormalizer<D>
where
    D: DirectoryLookup,
{
    /// Creates a normalizer that qualifies due instants with `timezone` and
    /// resolves assignees against `directory`.
    #[must_use]
    pub const fn new(directory: Arc<D>, timezone: FixedOffset) -> Self {
        Self {
            resolver: AssigneeResolver::new(directory),
            timezone,
        }
    }

    /// Validates title, priority and due date, leaving the task unassigned.
    ///
    /// The title is the trimmed candidate title, or `fallback_title` when
    /// the candidate has none.
    #[must_use]
    pub fn validate_fields(
        &self,
        candidate: &ParsedTaskCandidate,
        fallback_title: &str,
    ) -> NormalizedTask {
        let title = candidate
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(fallback_title);
        let due_date = candidate
            .due_date
            .as_deref()
            .and_then(|raw| parse_due_date(raw, self.timezone));

        NormalizedTask::new(title, infer_priority(candidate.priority.as_deref()))
            .with_due_date(due_date)
    }

    /// Resolves the candidate's assignee fragment onto `task`.
    ///
    /// Candidates without an assignee leave the task unassigned without a
    /// directory lookup.
    #[must_use]
    pub fn resolve_assignee(
        &self,
        task: NormalizedTask,
        candidate: &ParsedTaskCandidate,
    ) -> NormalizedTask {
        let assignee_id = candidate
            .assignee
            .as_deref()
            .and_then(|fragment| self.resolver.resolve(fragment));
        task.with_assignee(assignee_id)
    }

    /// Validates every field and resolves the assignee.
    #[must_use]
    pub fn normalize(
        &self,
        candidate: &ParsedTaskCandidate,
        fallback_title: &str,
    ) -> NormalizedTask {
        let validated = self.validate_fields(candidate, fallback_title);
        self.resolve_assignee(validated, candidate)
    }
}
