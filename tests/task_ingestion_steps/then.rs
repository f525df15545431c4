//! Then steps for task ingestion BDD scenarios.

use super::world::IngestionWorld;
use crate::test_helpers::ist;
use rstest_bdd_macros::then;
use tasksmith::{
    ingestion::{domain::IngestionError, services::TaskIntakeError},
    task::domain::{Priority, UserId, format_due_for_display},
};

#[then(r#"the stored task is titled "{title}""#)]
fn stored_task_titled(world: &IngestionWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.ingested()?.task();
    eyre::ensure!(
        task.title() == title,
        "expected title {title:?}, found {:?}",
        task.title()
    );
    Ok(())
}

#[then(r#"the stored task has priority "{priority}""#)]
fn stored_task_priority(world: &IngestionWorld, priority: String) -> Result<(), eyre::Report> {
    let expected = Priority::try_from(priority.as_str())?;
    let actual = world.ingested()?.task().priority();
    eyre::ensure!(actual == expected, "expected {expected}, found {actual}");
    Ok(())
}

#[then(r#"the stored task is due "{display}""#)]
fn stored_task_due(world: &IngestionWorld, display: String) -> Result<(), eyre::Report> {
    let due = world.ingested()?.task().due_date();
    let rendered = format_due_for_display(due.as_ref(), ist());
    eyre::ensure!(
        rendered == display,
        "expected due {display:?}, found {rendered:?}"
    );
    Ok(())
}

#[then("the stored task has no due date")]
fn stored_task_undated(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let due = world.ingested()?.task().due_date();
    eyre::ensure!(due.is_none(), "expected no due date, found {due:?}");
    Ok(())
}

#[then("the stored task is assigned to user {id:u64}")]
fn stored_task_assignee(world: &IngestionWorld, id: u64) -> Result<(), eyre::Report> {
    let assignee = world.ingested()?.task().assignee_id();
    eyre::ensure!(
        assignee == Some(UserId::new(id)),
        "expected assignee {id}, found {assignee:?}"
    );
    Ok(())
}

#[then("the outcome is degraded")]
fn outcome_degraded(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let outcome = world.ingested()?.outcome();
    eyre::ensure!(outcome.is_degraded(), "expected a degraded outcome");
    eyre::ensure!(
        outcome.fallback_reason().is_some(),
        "degraded outcome should carry a reason"
    );
    Ok(())
}

#[then("the outcome is not degraded")]
fn outcome_not_degraded(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let outcome = world.ingested()?.outcome();
    eyre::ensure!(
        !outcome.is_degraded(),
        "unexpected fallback: {:?}",
        outcome.fallback_reason()
    );
    Ok(())
}

#[then("the submission is rejected as empty")]
fn submission_rejected(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result in scenario world"))?;
    if !matches!(
        result,
        Err(TaskIntakeError::Ingestion(IngestionError::EmptyInput))
    ) {
        return Err(eyre::eyre!("expected empty input error, got {result:?}"));
    }
    Ok(())
}

#[then("the model was not called")]
fn model_not_called(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let calls = world.completion.requests().len();
    eyre::ensure!(calls == 0, "expected no model calls, found {calls}");
    Ok(())
}
