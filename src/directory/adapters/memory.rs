//! In-memory user directory.

use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::DirectoryUser,
    ports::{DirectoryError, DirectoryLookup, DirectoryResult},
};

/// Thread-safe in-memory directory.
///
/// Lookups return users in insertion order; callers must not rely on it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    users: Arc<RwLock<Vec<DirectoryUser>>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = DirectoryUser>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }

    /// Adds a user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] when the lock is poisoned.
    pub fn insert(&self, user: DirectoryUser) -> DirectoryResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|err| DirectoryError::unavailable(std::io::Error::other(err.to_string())))?;
        users.push(user);
        Ok(())
    }
}

impl DirectoryLookup for InMemoryDirectory {
    fn find_by_name_or_email_fragment(
        &self,
        fragment: &str,
    ) -> DirectoryResult<Vec<DirectoryUser>> {
        let needle = fragment.to_lowercase();
        let users = self
            .users
            .read()
            .map_err(|err| DirectoryError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(users
            .iter()
            .filter(|user| user.matches_lowercase_fragment(&needle))
            .cloned()
            .collect())
    }
}
