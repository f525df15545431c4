//! Compiles filter specs into task predicates.

use crate::query::domain::{DueBucket, FilterSpec};
use crate::task::domain::{Priority, Task, UserId, start_of_local_day};
use chrono::{DateTime, Duration, FixedOffset, Utc};

const DAYS_IN_WEEK_BUCKET: i64 = 7;

/// One independent constraint of a compiled filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Title contains the lowercased needle, ignoring case.
    TitleContains(String),
    /// Exact priority.
    Priority(Priority),
    /// Exact assignee. Unassigned tasks never match.
    Assignee(UserId),
    /// Exact completion flag.
    Completion(bool),
    /// Due in the half-open range `[start, end)`.
    DueWithin {
        /// Inclusive lower bound.
        start: DateTime<FixedOffset>,
        /// Exclusive upper bound.
        end: DateTime<FixedOffset>,
    },
    /// Due strictly before `now` and not completed.
    Overdue {
        /// Instant the query was made.
        now: DateTime<Utc>,
    },
    /// No due date.
    NoDueDate,
}

impl FilterClause {
    /// Returns whether `task` satisfies this clause.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::TitleContains(needle) => task.title().to_lowercase().contains(needle.as_str()),
            Self::Priority(priority) => task.priority() == *priority,
            Self::Assignee(assignee) => task.assignee_id() == Some(*assignee),
            Self::Completion(completed) => task.is_completed() == *completed,
            Self::DueWithin { start, end } => task
                .due_date()
                .is_some_and(|due| due >= *start && due < *end),
            Self::Overdue { now } => task.is_overdue_at(*now),
            Self::NoDueDate => task.due_date().is_none(),
        }
    }
}

/// Conjunction of filter clauses. An empty predicate matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPredicate {
    clauses: Vec<FilterClause>,
}

impl TaskPredicate {
    /// Returns whether `task` satisfies every clause.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.clauses.iter().all(|clause| clause.matches(task))
    }

    /// Returns the compiled clauses.
    #[must_use]
    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }
}

/// Compiles [`FilterSpec`]s against one configured offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCompiler {
    timezone: FixedOffset,
}

impl FilterCompiler {
    /// Creates a compiler whose day boundaries fall at midnight in
    /// `timezone`.
    #[must_use]
    pub const fn new(timezone: FixedOffset) -> Self {
        Self { timezone }
    }

    /// Compiles `spec`, resolving every bucket boundary from the single
    /// instant `now`.
    #[must_use]
    pub fn compile(&self, spec: &FilterSpec, now: DateTime<Utc>) -> TaskPredicate {
        let mut clauses = Vec::new();
        if let Some(text) = spec.search_text().filter(|text| !text.trim().is_empty()) {
            clauses.push(FilterClause::TitleContains(text.to_lowercase()));
        }
        if let Some(priority) = spec.priority() {
            clauses.push(FilterClause::Priority(priority));
        }
        if let Some(assignee) = spec.assignee_id() {
            clauses.push(FilterClause::Assignee(assignee));
        }
        if let Some(completed) = spec.completion() {
            clauses.push(FilterClause::Completion(completed));
        }
        if let Some(bucket) = spec.due_bucket() {
            clauses.push(self.bucket_clause(bucket, now));
        }
        TaskPredicate { clauses }
    }

    fn bucket_clause(&self, bucket: DueBucket, now: DateTime<Utc>) -> FilterClause {
        let midnight = start_of_local_day(now, self.timezone);
        match bucket {
            DueBucket::Today => FilterClause::DueWithin {
                start: midnight,
                end: midnight + Duration::days(1),
            },
            DueBucket::Week => FilterClause::DueWithin {
                start: midnight,
                end: midnight + Duration::days(DAYS_IN_WEEK_BUCKET),
            },
            DueBucket::Overdue => FilterClause::Overdue { now },
            DueBucket::NoDate => FilterClause::NoDueDate,
        }
    }
}
