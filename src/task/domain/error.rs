//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing a canonical priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}, expected one of P1, P2, P3, P4")]
pub struct ParsePriorityError(pub String);
