//! When steps for task filtering BDD scenarios.

use super::world::FilteringWorld;
use rstest_bdd_macros::when;
use tasksmith::query::domain::FilterParams;

#[when(r#"tasks due "{bucket}" are listed"#)]
fn tasks_due_in_bucket(world: &mut FilteringWorld, bucket: String) {
    world.list(FilterParams {
        due_date: Some(bucket),
        ..FilterParams::default()
    });
}

#[when("all tasks are listed")]
fn all_tasks(world: &mut FilteringWorld) {
    world.list(FilterParams::default());
}

#[when(r#"open tasks with priority "{priority}" are listed"#)]
fn open_tasks_with_priority(world: &mut FilteringWorld, priority: String) {
    world.list(FilterParams {
        priority: Some(priority),
        is_complete: Some("false".to_owned()),
        ..FilterParams::default()
    });
}

#[when(r#"tasks are listed with due date filter "{value}""#)]
fn tasks_with_due_filter(world: &mut FilteringWorld, value: String) {
    world.list(FilterParams {
        due_date: Some(value),
        ..FilterParams::default()
    });
}
