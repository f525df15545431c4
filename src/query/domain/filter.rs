//! Immutable filter specification.

use super::{DueBucket, FilterParams, FilterParamsError};
use crate::task::domain::{Priority, UserId};
use serde::{Deserialize, Serialize};

/// Independent, optional constraints on a task list.
///
/// Absent fields impose no constraint; a spec with every field absent
/// matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    search_text: Option<String>,
    priority: Option<Priority>,
    assignee_id: Option<UserId>,
    due_bucket: Option<DueBucket>,
    completion: Option<bool>,
}

impl FilterSpec {
    /// Creates a spec that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a spec from raw query parameters.
    ///
    /// Empty and whitespace-only values count as absent. The search text is
    /// kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`FilterParamsError`] when a priority, bucket, assignee or
    /// completion value is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasksmith::query::domain::{DueBucket, FilterParams, FilterSpec};
    /// use tasksmith::task::domain::Priority;
    ///
    /// let params = FilterParams {
    ///     priority: Some("p2".to_owned()),
    ///     due_date: Some("overdue".to_owned()),
    ///     is_complete: Some(String::new()),
    ///     ..FilterParams::default()
    /// };
    /// let spec = FilterSpec::from_params(params).expect("valid parameters");
    /// assert_eq!(spec.priority(), Some(Priority::P2));
    /// assert_eq!(spec.due_bucket(), Some(DueBucket::Overdue));
    /// assert_eq!(spec.completion(), None);
    /// ```
    pub fn from_params(params: FilterParams) -> Result<Self, FilterParamsError> {
        let FilterParams {
            search,
            priority,
            assignee,
            due_date,
            is_complete,
        } = params;

        let mut spec = Self::new();
        if let Some(text) = search.filter(|text| !text.trim().is_empty()) {
            spec = spec.with_search_text(text);
        }
        if let Some(raw) = present(priority.as_deref()) {
            spec = spec.with_priority(Priority::try_from(raw)?);
        }
        if let Some(raw) = present(assignee.as_deref()) {
            let id = raw
                .parse::<u64>()
                .map_err(|_| FilterParamsError::Assignee(raw.to_owned()))?;
            spec = spec.with_assignee(UserId::new(id));
        }
        if let Some(raw) = present(due_date.as_deref()) {
            spec = spec.with_due_bucket(raw.parse()?);
        }
        if let Some(raw) = present(is_complete.as_deref()) {
            spec = spec.with_completion(parse_completion(raw)?);
        }
        Ok(spec)
    }

    /// Restricts to titles containing `text`, ignoring case.
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Restricts to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to one assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Restricts to one due bucket.
    #[must_use]
    pub const fn with_due_bucket(mut self, bucket: DueBucket) -> Self {
        self.due_bucket = Some(bucket);
        self
    }

    /// Restricts to complete or incomplete tasks.
    #[must_use]
    pub const fn with_completion(mut self, completed: bool) -> Self {
        self.completion = Some(completed);
        self
    }

    /// Returns the search text, if any.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    /// Returns the priority constraint, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the assignee constraint, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Returns the due bucket constraint, if any.
    #[must_use]
    pub const fn due_bucket(&self) -> Option<DueBucket> {
        self.due_bucket
    }

    /// Returns the completion constraint, if any.
    #[must_use]
    pub const fn completion(&self) -> Option<bool> {
        self.completion
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

fn parse_completion(raw: &str) -> Result<bool, FilterParamsError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(FilterParamsError::Completion(raw.to_owned())),
    }
}
