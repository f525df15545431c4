//! Given steps for task filtering BDD scenarios.

use super::world::{FilteringWorld, SeedTask};
use rstest_bdd_macros::given;
use tasksmith::task::domain::Priority;

#[given(r#"a task "{title}" due "{due}""#)]
fn task_due(world: &mut FilteringWorld, title: String, due: String) -> Result<(), eyre::Report> {
    world.seed(
        &title,
        SeedTask {
            due: Some(due.as_str()),
            ..SeedTask::default()
        },
    )
}

#[given(r#"a completed task "{title}" due "{due}""#)]
fn completed_task_due(
    world: &mut FilteringWorld,
    title: String,
    due: String,
) -> Result<(), eyre::Report> {
    world.seed(
        &title,
        SeedTask {
            due: Some(due.as_str()),
            completed: true,
            ..SeedTask::default()
        },
    )
}

#[given(r#"a task "{title}" without a due date"#)]
fn task_without_due(world: &mut FilteringWorld, title: String) -> Result<(), eyre::Report> {
    world.seed(&title, SeedTask::default())
}

#[given(r#"a task "{title}" with priority "{priority}""#)]
fn task_with_priority(
    world: &mut FilteringWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    world.seed(
        &title,
        SeedTask {
            priority: Some(Priority::try_from(priority.as_str())?),
            ..SeedTask::default()
        },
    )
}

#[given(r#"a completed task "{title}" with priority "{priority}""#)]
fn completed_task_with_priority(
    world: &mut FilteringWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    world.seed(
        &title,
        SeedTask {
            priority: Some(Priority::try_from(priority.as_str())?),
            completed: true,
            ..SeedTask::default()
        },
    )
}
