//! Due-date parsing, timezone qualification and display.
//!
//! Every due instant leaving this module carries the configured target
//! offset, so consumers see an absolute point in time rather than a naive
//! local string.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Words that explicitly mean "this task has no due date".
const NO_DATE_WORDS: [&str; 8] = [
    "none",
    "null",
    "no date",
    "no due date",
    "n/a",
    "na",
    "never",
    "-",
];

/// Offset-qualified layouts not covered by RFC 3339 / RFC 2822.
const OFFSET_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Naive layouts, read as wall-clock time in the target timezone.
const WALL_CLOCK_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_LAYOUT: &str = "%Y-%m-%d";
const DISPLAY_LAYOUT: &str = "%b %-d, %Y, %I:%M %p";

/// Text shown for tasks without a due date.
pub const NO_DUE_DATE_LABEL: &str = "No due date";

/// Parses a due-date string into an instant qualified with `timezone`.
///
/// Strings carrying their own offset keep their absolute instant. Naive
/// date-times are wall-clock times in `timezone`, and bare dates mean
/// midnight there. Blank input, explicit "no date" words and anything
/// unparseable yield `None`; this function never fails.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use tasksmith::task::domain::parse_due_date;
///
/// let ist = FixedOffset::east_opt(19_800).expect("valid offset");
/// let due = parse_due_date("2024-01-02T09:30:00Z", ist).expect("parses");
/// assert_eq!(due.to_rfc3339(), "2024-01-02T15:00:00+05:30");
/// assert!(parse_due_date("next blue moon", ist).is_none());
/// ```
#[must_use]
pub fn parse_due_date(raw: &str, timezone: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let value = raw.trim();
    if value.is_empty() || is_no_date_word(value) {
        return None;
    }

    parse_absolute(value)
        .or_else(|| parse_wall_clock(value, timezone))
        .map(|instant| instant.with_timezone(&timezone))
}

fn is_no_date_word(value: &str) -> bool {
    let lowered = value.to_lowercase();
    NO_DATE_WORDS.contains(&lowered.as_str())
}

fn parse_absolute(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
        .or_else(|| {
            OFFSET_LAYOUTS
                .iter()
                .find_map(|layout| DateTime::parse_from_str(value, layout).ok())
        })
}

fn parse_wall_clock(value: &str, timezone: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let naive = WALL_CLOCK_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_LAYOUT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;
    timezone.from_local_datetime(&naive).single()
}

/// Returns midnight of the local day containing `instant` in `timezone`.
#[must_use]
pub fn start_of_local_day(instant: DateTime<Utc>, timezone: FixedOffset) -> DateTime<FixedOffset> {
    let local = instant.with_timezone(&timezone);
    let elapsed = local.time().signed_duration_since(NaiveTime::MIN);
    local - elapsed
}

/// Formats a due instant for people, in `timezone`.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use tasksmith::task::domain::{format_due_for_display, parse_due_date};
///
/// let ist = FixedOffset::east_opt(19_800).expect("valid offset");
/// let due = parse_due_date("2024-01-02T15:00:00", ist);
/// assert_eq!(format_due_for_display(due.as_ref(), ist), "Jan 2, 2024, 03:00 PM");
/// assert_eq!(format_due_for_display(None, ist), "No due date");
/// ```
#[must_use]
pub fn format_due_for_display(
    due: Option<&DateTime<FixedOffset>>,
    timezone: FixedOffset,
) -> String {
    due.map_or_else(
        || NO_DUE_DATE_LABEL.to_owned(),
        |instant| {
            instant
                .with_timezone(&timezone)
                .format(DISPLAY_LAYOUT)
                .to_string()
        },
    )
}
