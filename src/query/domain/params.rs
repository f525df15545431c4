//! Raw query parameters as sent by task list clients.

use serde::{Deserialize, Serialize};

/// Untyped filter parameters, one string per query key.
///
/// Keys match the task list query string: `search`, `priority`,
/// `assignee`, `due_date` and `is_complete`. Convert with
/// [`FilterSpec::from_params`](super::FilterSpec::from_params).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Free-text title search.
    pub search: Option<String>,
    /// `P1`..`P4`.
    pub priority: Option<String>,
    /// Numeric user identifier.
    pub assignee: Option<String>,
    /// `today`, `week`, `overdue` or `no-date`.
    pub due_date: Option<String>,
    /// `true` or `false`.
    pub is_complete: Option<String>,
}
