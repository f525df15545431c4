//! Completion-service port used by the inference client.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for completion calls.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Shape the completion service is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// A single JSON object.
    #[default]
    Json,
    /// Unconstrained text.
    Text,
}

/// One completion call: a system prompt and the user's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    system_prompt: String,
    user_text: String,
    response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Creates a request that asks for a JSON object.
    #[must_use]
    pub fn new(system_prompt: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_text: user_text.into(),
            response_format: ResponseFormat::Json,
        }
    }

    /// Sets the response format.
    #[must_use]
    pub const fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = response_format;
        self
    }

    /// Returns the system prompt.
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Returns the user text.
    #[must_use]
    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    /// Returns the requested response format.
    #[must_use]
    pub const fn response_format(&self) -> ResponseFormat {
        self.response_format
    }
}

/// Text-completion contract.
///
/// Implementations make one attempt per call. Retrying, timing out and
/// falling back are the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Returns the completion text for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError`] when the service cannot be reached,
    /// rejects the request or returns no content.
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String>;
}

/// Errors returned by completion adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    /// The request could not be sent or the response could not be read.
    #[error("completion transport failed: {0}")]
    Transport(String),

    /// The adapter's own request timeout elapsed.
    #[error("completion request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("completion service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// Credentials were missing or rejected.
    #[error("completion service rejected credentials: {0}")]
    Authentication(String),

    /// The service answered without any completion text.
    #[error("completion service returned no content")]
    EmptyResponse,
}
