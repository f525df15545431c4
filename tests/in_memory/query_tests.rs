//! Filtering and ordering of ingested tasks.

use super::helpers::{Engine, JOHN, REQUESTER, engine};
use rstest::rstest;
use tasksmith::{
    ingestion::{adapters::ScriptedReply, domain::IngestionRequest},
    query::domain::{DueBucket, FilterParams, FilterSpec},
    task::domain::{Priority, ProjectId},
};

/// Ingests one task per scripted reply, in order.
async fn ingest_all(engine: &Engine, project: ProjectId, replies: &[&str]) {
    for reply in replies {
        engine.completion.push(ScriptedReply::content(*reply));
        engine
            .intake
            .create_from_text(&IngestionRequest::new("scripted", project, REQUESTER))
            .await
            .expect("intake succeeds");
    }
}

fn titles(tasks: &[tasksmith::task::domain::Task]) -> Vec<&str> {
    tasks.iter().map(tasksmith::task::domain::Task::title).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buckets_partition_ingested_tasks(engine: Engine) {
    let project = ProjectId::new();
    ingest_all(
        &engine,
        project,
        &[
            r#"{"title":"Yesterday's report","dueDate":"2023-12-31T18:00:00+05:30"}"#,
            r#"{"title":"Standup notes","dueDate":"2024-01-01T18:00:00+05:30"}"#,
            r#"{"title":"Quarterly plan","dueDate":"2024-01-11"}"#,
            r#"{"title":"Someday idea","dueDate":"none"}"#,
        ],
    )
    .await;

    let bucket = |value: DueBucket| {
        let query = engine.query.clone();
        async move {
            query
                .query(project, &FilterSpec::new().with_due_bucket(value))
                .await
                .expect("query succeeds")
        }
    };

    assert_eq!(titles(&bucket(DueBucket::Overdue).await), ["Yesterday's report"]);
    assert_eq!(titles(&bucket(DueBucket::Today).await), ["Standup notes"]);
    assert_eq!(titles(&bucket(DueBucket::Week).await), ["Standup notes"]);
    assert_eq!(titles(&bucket(DueBucket::NoDate).await), ["Someday idea"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unfiltered_results_use_canonical_order(engine: Engine) {
    let project = ProjectId::new();
    ingest_all(
        &engine,
        project,
        &[
            r#"{"title":"Undated"}"#,
            r#"{"title":"Due later","dueDate":"2024-01-05T09:00:00+05:30"}"#,
            r#"{"title":"Due soon","dueDate":"2024-01-02T09:00:00+05:30"}"#,
        ],
    )
    .await;

    let all = engine
        .query
        .query(project, &FilterSpec::new())
        .await
        .expect("query succeeds");

    assert_eq!(titles(&all), ["Due soon", "Due later", "Undated"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn raw_params_combine_search_priority_and_assignee(engine: Engine) {
    let project = ProjectId::new();
    ingest_all(
        &engine,
        project,
        &[
            r#"{"title":"Fix login bug","priority":"urgent","assignee":"john"}"#,
            r#"{"title":"Fix signup bug","priority":"minor","assignee":"john"}"#,
            r#"{"title":"Fix login copy","priority":"critical","assignee":"priya"}"#,
        ],
    )
    .await;

    let found = engine
        .query
        .query_params(
            project,
            FilterParams {
                search: Some("LOGIN".to_owned()),
                priority: Some("P1".to_owned()),
                assignee: Some(JOHN.to_string()),
                ..FilterParams::default()
            },
        )
        .await
        .expect("query succeeds");

    assert_eq!(titles(&found), ["Fix login bug"]);
    assert!(found.iter().all(|task| task.priority() == Priority::P1));
}
