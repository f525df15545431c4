//! Error types for ingestion inputs and candidate decoding.

use thiserror::Error;

/// Caller input errors, raised before any external call is made.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IngestionError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyInput,
}

/// Error returned when completion text cannot be read as a candidate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CandidateDecodeError {
    /// The text is not valid JSON.
    #[error("completion output is not valid JSON: {0}")]
    InvalidJson(String),

    /// The JSON value is not an object.
    #[error("completion output is not a JSON object")]
    NotAnObject,
}
