//! Given steps for task ingestion BDD scenarios.

use super::world::IngestionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;
use tasksmith::{
    directory::domain::DirectoryUser,
    ingestion::{adapters::ScriptedReply, ports::CompletionError},
    task::domain::UserId,
};

#[given(r#"a directory user "{name}" with email "{email}" and id {id:u64}"#)]
fn directory_user(
    world: &mut IngestionWorld,
    name: String,
    email: String,
    id: u64,
) -> Result<(), eyre::Report> {
    world
        .directory
        .insert(DirectoryUser::new(UserId::new(id), name, email))
        .wrap_err("insert directory user")
}

#[given(
    r#"the model extracts title "{title}", due "{due}", priority "{priority}" and assignee "{assignee}""#
)]
fn model_extracts(
    world: &mut IngestionWorld,
    title: String,
    due: String,
    priority: String,
    assignee: String,
) {
    let reply = json!({
        "title": title,
        "dueDate": due,
        "priority": priority,
        "assignee": assignee,
    });
    world
        .completion
        .push(ScriptedReply::content(reply.to_string()));
}

#[given("the model service is unavailable")]
fn model_unavailable(world: &mut IngestionWorld) {
    world
        .completion
        .push(ScriptedReply::Failure(CompletionError::Transport(
            "connection refused".to_owned(),
        )));
}

#[given("inference is disabled")]
fn inference_disabled(world: &mut IngestionWorld) {
    world.disable_inference();
}
