//! Text intake through inference, fallback and storage.

use super::helpers::{Engine, JOHN, REQUESTER, engine, ist, ist_at, now};
use rstest::rstest;
use std::time::Duration;
use tasksmith::{
    config::{EngineConfig, InferenceConfig},
    ingestion::{
        adapters::{ScriptedCompletionService, ScriptedReply},
        domain::{IngestionError, IngestionRequest},
        ports::CompletionError,
        services::TaskIntakeError,
    },
    task::{
        domain::{Priority, ProjectId, format_due_for_display},
        ports::TaskRepository,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn landing_page_request_is_fully_structured(engine: Engine) {
    engine.completion.push(ScriptedReply::content(
        r#"{"title":"Finish landing page","assignee":"John","dueDate":"2024-01-02T17:00:00+05:30","priority":"P2"}"#,
    ));
    let project = ProjectId::new();

    let ingested = engine
        .intake
        .create_from_text(&IngestionRequest::new(
            "Finish landing page by tomorrow 5pm P2, assign to John",
            project,
            REQUESTER,
        ))
        .await
        .expect("intake succeeds");

    let task = ingested.task();
    assert_eq!(task.title(), "Finish landing page");
    assert_eq!(task.priority(), Priority::P2);
    assert_eq!(task.assignee_id(), Some(JOHN));
    assert_eq!(task.created_by(), REQUESTER);
    assert_eq!(task.due_date(), Some(ist_at((2024, 1, 2), (17, 0))));
    assert_eq!(
        format_due_for_display(task.due_date().as_ref(), ist()),
        "Jan 2, 2024, 05:00 PM"
    );
    assert_eq!(task.created_at(), now());

    let prompt = engine
        .completion
        .requests()
        .first()
        .map(|request| request.system_prompt().to_owned())
        .unwrap_or_default();
    assert!(prompt.contains("2024-01-01T10:00:00+05:30"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_inference_still_creates_a_plain_task(engine: Engine) {
    engine
        .completion
        .push(ScriptedReply::Failure(CompletionError::Status {
            status: 500,
            body: "upstream error".to_owned(),
        }));
    let project = ProjectId::new();

    let ingested = engine
        .intake
        .create_from_text(&IngestionRequest::new("Buy milk", project, REQUESTER))
        .await
        .expect("fallback is not an error");

    assert!(ingested.outcome().is_degraded());
    assert_eq!(ingested.task().title(), "Buy milk");
    assert_eq!(ingested.task().priority(), Priority::P3);
    assert_eq!(ingested.task().due_date(), None);
    assert_eq!(ingested.task().assignee_id(), Some(REQUESTER));
    assert_eq!(
        engine
            .repository
            .list_by_project(project)
            .await
            .expect("list")
            .len(),
        1
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slow_inference_times_out_to_fallback() {
    let config = EngineConfig {
        inference: InferenceConfig::default().with_timeout(Duration::from_millis(20)),
        ..EngineConfig::default()
    };
    let slow = ScriptedCompletionService::with_replies([ScriptedReply::content(
        r#"{"title":"never used"}"#,
    )])
    .with_delay(Duration::from_millis(400));
    let engine = Engine::build(&config, slow);

    let ingested = engine
        .intake
        .create_from_text(&IngestionRequest::new("Buy milk", ProjectId::new(), REQUESTER))
        .await
        .expect("fallback is not an error");

    assert!(ingested.outcome().is_degraded());
    assert_eq!(ingested.task().title(), "Buy milk");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disabled_inference_never_calls_the_model() {
    let engine = Engine::with_config(&EngineConfig {
        inference: InferenceConfig::disabled(),
        ..EngineConfig::default()
    });

    let ingested = engine
        .intake
        .create_from_text(&IngestionRequest::new(
            "Email Priya the report",
            ProjectId::new(),
            REQUESTER,
        ))
        .await
        .expect("fallback is not an error");

    assert!(ingested.outcome().is_degraded());
    assert_eq!(ingested.outcome().fallback_reason(), Some("inference is disabled"));
    assert!(engine.completion.requests().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_text_is_a_caller_error(engine: Engine) {
    let result = engine
        .intake
        .create_from_text(&IngestionRequest::new(" \n ", ProjectId::new(), REQUESTER))
        .await;

    assert!(matches!(
        result,
        Err(TaskIntakeError::Ingestion(IngestionError::EmptyInput))
    ));
    assert!(engine.completion.requests().is_empty());
}
