//! Caller input errors for filter construction.

use crate::task::domain::ParsePriorityError;
use thiserror::Error;

/// Error returned when a due bucket name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown due-date bucket: {0}")]
pub struct ParseDueBucketError(pub String);

/// Errors raised while building a filter from raw query parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterParamsError {
    /// The priority value is not P1 to P4.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),

    /// The due-date value is not a known bucket.
    #[error(transparent)]
    DueBucket(#[from] ParseDueBucketError),

    /// The assignee value is not a user identifier.
    #[error("invalid assignee identifier: {0}")]
    Assignee(String),

    /// The completion value is not a boolean.
    #[error("invalid completion flag: {0}")]
    Completion(String),
}
