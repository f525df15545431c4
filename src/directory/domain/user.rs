//! Directory user record.

use crate::task::domain::UserId;
use serde::{Deserialize, Serialize};

/// A user as exposed by the directory: identity, display name and email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectoryUser {
    id: UserId,
    name: String,
    email: String,
}

impl DirectoryUser {
    /// Creates a directory user.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the identity.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns whether `needle` occurs in the name or email, ignoring case.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase_fragment(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}
