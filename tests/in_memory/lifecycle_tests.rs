//! Completion toggles, field updates and deletion of ingested tasks.

use super::helpers::{Engine, PRIYA, REQUESTER, engine};
use rstest::rstest;
use tasksmith::{
    ingestion::{adapters::ScriptedReply, domain::IngestionRequest},
    query::domain::FilterSpec,
    task::{
        domain::{Priority, ProjectId, Task, TaskUpdate},
        services::TaskLifecycleError,
    },
};

async fn ingest(engine: &Engine, project: ProjectId, reply: &str) -> Result<Task, eyre::Report> {
    engine.completion.push(ScriptedReply::content(reply));
    let ingested = engine
        .intake
        .create_from_text(&IngestionRequest::new("ignored text", project, REQUESTER))
        .await?;
    Ok(ingested.task().clone())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggled_task_moves_between_completion_filters(engine: Engine) -> Result<(), eyre::Report> {
    let project = ProjectId::new();
    let task = ingest(&engine, project, r#"{"title":"Book venue"}"#).await?;

    engine.lifecycle.toggle_completion(task.id()).await?;

    let done = engine
        .query
        .query(project, &FilterSpec::new().with_completion(true))
        .await?;
    let open = engine
        .query
        .query(project, &FilterSpec::new().with_completion(false))
        .await?;
    eyre::ensure!(done.len() == 1, "expected one completed task, found {}", done.len());
    eyre::ensure!(open.is_empty(), "expected no open tasks");

    engine.lifecycle.set_completion(task.id(), false).await?;
    let reopened = engine
        .query
        .query(project, &FilterSpec::new().with_completion(false))
        .await?;
    eyre::ensure!(reopened.len() == 1, "expected the task to be open again");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updated_fields_are_visible_to_queries(engine: Engine) -> Result<(), eyre::Report> {
    let project = ProjectId::new();
    let task = ingest(&engine, project, r#"{"title":"Draft budget","priority":"low"}"#).await?;

    engine
        .lifecycle
        .update(
            task.id(),
            TaskUpdate::new()
                .with_priority(Priority::P1)
                .with_assignee(Some(PRIYA)),
        )
        .await?;

    let found = engine
        .query
        .query(
            project,
            &FilterSpec::new()
                .with_priority(Priority::P1)
                .with_assignee(PRIYA),
        )
        .await?;
    let first = found
        .first()
        .ok_or_else(|| eyre::eyre!("expected the updated task"))?;
    eyre::ensure!(first.id() == task.id(), "task ID mismatch");
    eyre::ensure!(first.title() == "Draft budget", "title should be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_leaves_project_listing(engine: Engine) -> Result<(), eyre::Report> {
    let project = ProjectId::new();
    let doomed = ingest(&engine, project, r#"{"title":"Cancel order"}"#).await?;
    let kept = ingest(&engine, project, r#"{"title":"Confirm order"}"#).await?;

    engine.lifecycle.delete(doomed.id()).await?;

    let listed = engine.query.query(project, &FilterSpec::new()).await?;
    let titles: Vec<&str> = listed.iter().map(Task::title).collect();
    eyre::ensure!(titles == [kept.title()], "unexpected listing {titles:?}");

    let again = engine.lifecycle.delete(doomed.id()).await;
    eyre::ensure!(
        matches!(again, Err(TaskLifecycleError::NotFound(id)) if id == doomed.id()),
        "expected not found, got {again:?}"
    );
    Ok(())
}
