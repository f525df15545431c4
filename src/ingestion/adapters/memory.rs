//! Scripted in-memory completion service.

use crate::ingestion::ports::{
    CompletionError, CompletionRequest, CompletionResult, CompletionService,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// Completion text returned verbatim.
    Content(String),
    /// Error returned instead of content.
    Failure(CompletionError),
}

impl ScriptedReply {
    /// Scripts a content reply.
    #[must_use]
    pub fn content(text: impl Into<String>) -> Self {
        Self::Content(text.into())
    }
}

/// Completion service that answers from a queue of scripted replies.
///
/// Replies are consumed in order; an exhausted queue answers with
/// [`CompletionError::EmptyResponse`]. Every request is recorded so callers
/// can inspect the rendered prompt. An optional delay is awaited before each
/// answer, which lets callers exercise timeouts.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCompletionService {
    state: Arc<Mutex<ScriptState>>,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
struct ScriptState {
    replies: VecDeque<ScriptedReply>,
    requests: Vec<CompletionRequest>,
}

impl ScriptedCompletionService {
    /// Creates a service with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service that answers with `replies` in order.
    #[must_use]
    pub fn with_replies(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        let service = Self::new();
        for reply in replies {
            service.push(reply);
        }
        service
    }

    /// Delays every answer by `delay`.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Appends a reply to the script.
    pub fn push(&self, reply: ScriptedReply) {
        if let Some(mut state) = self.lock() {
            state.replies.push_back(reply);
        }
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Option<MutexGuard<'_, ScriptState>> {
        self.state.lock().ok()
    }

    fn next_reply(&self, request: &CompletionRequest) -> CompletionResult<String> {
        let mut state = self
            .lock()
            .ok_or_else(|| CompletionError::Transport("scripted state poisoned".to_owned()))?;
        state.requests.push(request.clone());
        match state.replies.pop_front() {
            Some(ScriptedReply::Content(text)) => Ok(text),
            Some(ScriptedReply::Failure(err)) => Err(err),
            None => Err(CompletionError::EmptyResponse),
        }
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.next_reply(request)
    }
}
