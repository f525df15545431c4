//! Untrusted task candidate produced by language inference.

use super::CandidateDecodeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const TITLE_KEYS: [&str; 2] = ["title", "taskName"];
const DUE_DATE_KEYS: [&str; 2] = ["dueDate", "due_date"];
const PRIORITY_KEYS: [&str; 1] = ["priority"];
const ASSIGNEE_KEYS: [&str; 1] = ["assignee"];

/// Raw structure guessed by the model. No field is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTaskCandidate {
    /// Task title.
    pub title: Option<String>,
    /// Free-form or ISO due date.
    pub due_date: Option<String>,
    /// Priority token, canonical or a severity word.
    pub priority: Option<String>,
    /// Name or email fragment of the assignee, not an identity.
    pub assignee: Option<String>,
}

impl ParsedTaskCandidate {
    /// Decodes completion output into a candidate.
    ///
    /// Any JSON object is accepted. Missing keys and `null` become absent
    /// fields, numbers and booleans keep their textual form, and nested
    /// values are dropped. A surrounding Markdown code fence is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateDecodeError`] when the text is not JSON or not an
    /// object.
    pub fn from_json(raw: &str) -> Result<Self, CandidateDecodeError> {
        let value: Value = serde_json::from_str(strip_code_fence(raw))
            .map_err(|err| CandidateDecodeError::InvalidJson(err.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(CandidateDecodeError::NotAnObject);
        };

        Ok(Self {
            title: text_field(&fields, &TITLE_KEYS),
            due_date: text_field(&fields, &DUE_DATE_KEYS),
            priority: text_field(&fields, &PRIORITY_KEYS),
            assignee: text_field(&fields, &ASSIGNEE_KEYS),
        })
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the due date string.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the priority token.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the assignee fragment.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let without_tag = body.strip_prefix("json").unwrap_or(body);
    without_tag.strip_suffix("```").unwrap_or(without_tag).trim()
}

fn text_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match fields.get(*key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
