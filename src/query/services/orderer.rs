//! Canonical ordering of task lists.

use crate::task::domain::Task;
use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;

/// Compares two tasks in canonical order: incomplete before complete, then
/// earliest due first with undated tasks last, then newest first.
#[must_use]
pub fn canonical_order(left: &Task, right: &Task) -> Ordering {
    left.is_completed()
        .cmp(&right.is_completed())
        .then_with(|| due_order(left.due_date(), right.due_date()))
        .then_with(|| right.created_at().cmp(&left.created_at()))
}

/// Sorts `tasks` into canonical order. The sort is stable, so applying it
/// twice changes nothing.
#[must_use]
pub fn order_tasks(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(canonical_order);
    tasks
}

fn due_order(
    left: Option<DateTime<FixedOffset>>,
    right: Option<DateTime<FixedOffset>>,
) -> Ordering {
    match (left, right) {
        (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
