//! Directory lookup port.

use crate::directory::domain::DirectoryUser;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Read-only user directory.
pub trait DirectoryLookup: Send + Sync {
    /// Returns every user whose name or email contains `fragment`, compared
    /// case-insensitively. Result order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] when the directory cannot be
    /// read.
    fn find_by_name_or_email_fragment(&self, fragment: &str)
    -> DirectoryResult<Vec<DirectoryUser>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The directory backend failed.
    #[error("directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
