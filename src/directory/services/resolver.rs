//! Assignee resolution from free-text name or email fragments.

use crate::directory::{domain::DirectoryUser, ports::DirectoryLookup};
use crate::task::domain::UserId;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves an assignee fragment to a single directory identity.
///
/// Matching is a case-insensitive substring test over name and email. When
/// several users match, the one with the lowest [`UserId`] wins, so the
/// result never depends on the directory's return order. Resolution is
/// total: no match, a blank fragment or a failing directory all yield `None`,
/// which leaves the task unassigned rather than blocking its creation.
#[derive(Clone)]
pub struct AssigneeResolver<D>
where
    D: DirectoryLookup,
{
    directory: Arc<D>,
}

impl<D> AssigneeResolver<D>
where
    D: DirectoryLookup,
{
    /// Creates a resolver over `directory`.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Resolves `fragment` to a directory identity.
    ///
    /// Blank fragments return `None` without querying the directory.
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> Option<UserId> {
        let needle = fragment.trim();
        if needle.is_empty() {
            return None;
        }

        let candidates = match self.directory.find_by_name_or_email_fragment(needle) {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(error = %err, "directory lookup failed; leaving task unassigned");
                return None;
            }
        };

        let resolved = candidates.iter().map(DirectoryUser::id).min();
        match resolved {
            Some(id) => debug!(
                matches = candidates.len(),
                assignee = %id,
                "resolved assignee fragment"
            ),
            None => debug!("no directory user matches assignee fragment"),
        }
        resolved
    }
}
