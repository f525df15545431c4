//! Chat-completions adapter for OpenAI-compatible HTTP endpoints.

use crate::config::InferenceConfig;
use crate::ingestion::ports::{
    CompletionError, CompletionRequest, CompletionResult, CompletionService, ResponseFormat,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::warn;

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 500;
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Completion service backed by a chat-completions endpoint.
///
/// Sends the system prompt and user text as two messages and returns the
/// first choice's content. The configured timeout is applied per request.
#[derive(Debug, Clone)]
pub struct OpenAiCompletionService {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl OpenAiCompletionService {
    /// Creates an adapter from inference settings.
    #[must_use]
    pub fn new(config: &InferenceConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates an adapter that reuses an existing HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &InferenceConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        }
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: request.user_text(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: match request.response_format() {
                ResponseFormat::Json => Some(ChatResponseFormat {
                    kind: "json_object",
                }),
                ResponseFormat::Text => None,
            },
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::Authentication("no API key configured".to_owned()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .json(&self.body(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CompletionError::Authentication(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(status_error(status, response.text().await));
        }

        let payload: ChatResponse = response.json().await.map_err(map_transport_error)?;
        first_content(payload).ok_or(CompletionError::EmptyResponse)
    }
}

fn status_error(status: StatusCode, body: Result<String, impl fmt::Display>) -> CompletionError {
    let text = body.unwrap_or_else(|err| {
        warn!(status = status.as_u16(), error = %err, "failed to read error response body");
        format!("unreadable response body: {err}")
    });
    CompletionError::Status {
        status: status.as_u16(),
        body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

fn map_transport_error(error: reqwest::Error) -> CompletionError {
    if error.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Transport(error.to_string())
    }
}

fn first_content(payload: ChatResponse) -> Option<String> {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ChatResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
