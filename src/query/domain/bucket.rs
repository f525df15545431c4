//! Semantic due-date buckets.

use super::ParseDueBucketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Due-date bucket a task can be filtered by.
///
/// Boundaries are computed from one "now" in the configured offset:
///
/// - `Today`: due in `[midnight today, midnight tomorrow)`
/// - `Week`: due in `[midnight today, midnight today + 7 days)`
/// - `Overdue`: due strictly before now and not completed
/// - `NoDate`: no due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueBucket {
    /// Due during the current local day.
    Today,
    /// Due within seven days of the start of the current local day.
    Week,
    /// Past due and incomplete.
    Overdue,
    /// Without a due date.
    NoDate,
}

impl DueBucket {
    /// All buckets.
    pub const ALL: [Self; 4] = [Self::Today, Self::Week, Self::Overdue, Self::NoDate];

    /// Returns the wire name of the bucket.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Overdue => "overdue",
            Self::NoDate => "no-date",
        }
    }
}

impl FromStr for DueBucket {
    type Err = ParseDueBucketError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseDueBucketError(value.to_owned()))
    }
}

impl fmt::Display for DueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
