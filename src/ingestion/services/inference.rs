//! Language inference client.
//!
//! Renders the system prompt, calls the completion service under a time
//! budget and decodes the reply into an untrusted candidate.

use crate::ingestion::{
    domain::{CandidateDecodeError, PRIORITY_VOCABULARY, ParsedTaskCandidate},
    ports::{CompletionError, CompletionRequest, CompletionService},
};
use crate::task::domain::Priority;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use minijinja::{Environment, context};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

const SYSTEM_PROMPT_TEMPLATE: &str = "\
You are a task parsing assistant. Extract the following components from the task description:
1. title: the main action of the task
2. assignee: the name or email of the person the task is for, if present
3. dueDate: the due date and time, if present
4. priority: one of P1, P2, P3 or P4

Respond with a single JSON object and nothing else:
{\"title\": \"string\", \"assignee\": \"string or null\", \"dueDate\": \"ISO 8601 date-time with offset, or null\", \"priority\": \"P1, P2, P3 or P4\"}

The current time is {{ now }} in timezone {{ timezone }}. Resolve relative expressions such as \"tomorrow\", \"in 2 days\" or \"EOD\" against it, and express due dates in that timezone.

P1 is the highest priority and P4 the lowest. Map priority words as follows:
{% for level in priorities %}- {{ level.words | join(\", \") }} -> {{ level.name }}
{% endfor %}
If a field is not specified, set it to null, except priority, which defaults to P3.";

/// Why inference produced no candidate.
///
/// Every variant is recovered by the orchestrator's fallback path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InferenceUnavailable {
    /// The completion call exceeded its time budget.
    #[error("inference timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The completion service failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The completion text could not be read as a candidate.
    #[error(transparent)]
    MalformedOutput(#[from] CandidateDecodeError),

    /// The system prompt could not be rendered.
    #[error("failed to render inference prompt: {0}")]
    PromptRender(String),

    /// Inference is switched off by configuration.
    #[error("inference is disabled")]
    Disabled,
}

#[derive(Debug, Serialize)]
struct VocabularyLevel {
    name: &'static str,
    words: Vec<&'static str>,
}

/// Client that turns raw task text into a [`ParsedTaskCandidate`].
#[derive(Clone)]
pub struct InferenceClient<S, C>
where
    S: CompletionService,
    C: Clock + Send + Sync,
{
    service: Arc<S>,
    clock: Arc<C>,
    timezone: FixedOffset,
    timeout: Duration,
}

impl<S, C> InferenceClient<S, C>
where
    S: CompletionService,
    C: Clock + Send + Sync,
{
    /// Creates a client that resolves relative dates in `timezone` and gives
    /// each completion call at most `timeout`.
    #[must_use]
    pub const fn new(
        service: Arc<S>,
        clock: Arc<C>,
        timezone: FixedOffset,
        timeout: Duration,
    ) -> Self {
        Self {
            service,
            clock,
            timezone,
            timeout,
        }
    }

    /// Renders the system prompt for a call made at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceUnavailable::PromptRender`] when the template fails
    /// to render.
    pub fn render_prompt(&self, now: DateTime<Utc>) -> Result<String, InferenceUnavailable> {
        let local_now = now
            .with_timezone(&self.timezone)
            .to_rfc3339_opts(SecondsFormat::Secs, false);
        let environment = Environment::new();
        environment
            .render_str(
                SYSTEM_PROMPT_TEMPLATE,
                context! {
                    now => local_now,
                    timezone => self.timezone.to_string(),
                    priorities => vocabulary_levels(),
                },
            )
            .map_err(|err| InferenceUnavailable::PromptRender(err.to_string()))
    }

    /// Infers a candidate from `text`.
    ///
    /// Makes exactly one completion call. "Now" is read from the clock on
    /// every call.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceUnavailable`] when the call times out or fails, or
    /// when the reply is not a JSON object.
    pub async fn infer(&self, text: &str) -> Result<ParsedTaskCandidate, InferenceUnavailable> {
        let prompt = self.render_prompt(self.clock.utc())?;
        let request = CompletionRequest::new(prompt, text);

        debug!(timeout_ms = millis(self.timeout), "requesting task inference");
        let started = Instant::now();
        let reply = tokio::time::timeout(self.timeout, self.service.complete(&request)).await;
        let elapsed_ms = millis(started.elapsed());

        let result = match reply {
            Err(_) => Err(InferenceUnavailable::Timeout(self.timeout)),
            Ok(Err(err)) => Err(InferenceUnavailable::from(err)),
            Ok(Ok(content)) => {
                ParsedTaskCandidate::from_json(&content).map_err(InferenceUnavailable::from)
            }
        };

        match &result {
            Ok(candidate) => info!(
                elapsed_ms,
                has_title = candidate.title.is_some(),
                has_assignee = candidate.assignee.is_some(),
                has_due_date = candidate.due_date.is_some(),
                has_priority = candidate.priority.is_some(),
                "task inference succeeded"
            ),
            Err(err) => warn!(elapsed_ms, error = %err, "task inference failed"),
        }
        result
    }
}

fn vocabulary_levels() -> Vec<VocabularyLevel> {
    Priority::ALL
        .iter()
        .map(|level| VocabularyLevel {
            name: level.as_str(),
            words: PRIORITY_VOCABULARY
                .iter()
                .filter(|(_, priority)| priority == level)
                .map(|(word, _)| *word)
                .collect(),
        })
        .collect()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
