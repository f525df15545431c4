//! Priority vocabulary shared by the inference prompt and the normalizer.

use crate::task::domain::Priority;

/// Tokens mapped to priorities, compared after lowercasing and collapsing
/// whitespace.
pub const PRIORITY_VOCABULARY: [(&str, Priority); 24] = [
    ("p1", Priority::P1),
    ("1", Priority::P1),
    ("critical", Priority::P1),
    ("urgent", Priority::P1),
    ("immediate", Priority::P1),
    ("high", Priority::P1),
    ("highest", Priority::P1),
    ("p2", Priority::P2),
    ("2", Priority::P2),
    ("important", Priority::P2),
    ("medium", Priority::P2),
    ("p3", Priority::P3),
    ("3", Priority::P3),
    ("low", Priority::P3),
    ("not important", Priority::P3),
    ("normal", Priority::P3),
    ("p4", Priority::P4),
    ("4", Priority::P4),
    ("optional", Priority::P4),
    ("trivial", Priority::P4),
    ("minor", Priority::P4),
    ("very low", Priority::P4),
    ("neglected", Priority::P4),
    ("lowest", Priority::P4),
];

/// Maps a candidate priority token to a priority.
///
/// Total: absent and unrecognised tokens map to [`Priority::P3`].
///
/// # Examples
///
/// ```
/// use tasksmith::ingestion::domain::infer_priority;
/// use tasksmith::task::domain::Priority;
///
/// assert_eq!(infer_priority(Some("URGENT")), Priority::P1);
/// assert_eq!(infer_priority(Some("very   low")), Priority::P4);
/// assert_eq!(infer_priority(Some("whenever")), Priority::P3);
/// assert_eq!(infer_priority(None), Priority::P3);
/// ```
#[must_use]
pub fn infer_priority(token: Option<&str>) -> Priority {
    let Some(raw) = token else {
        return Priority::default();
    };
    let normalized = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    PRIORITY_VOCABULARY
        .iter()
        .find(|(word, _)| *word == normalized)
        .map_or_else(Priority::default, |(_, priority)| *priority)
}
