//! When steps for task ingestion BDD scenarios.

use super::world::{IngestionWorld, REQUESTER, run_async};
use rstest_bdd_macros::when;
use tasksmith::ingestion::domain::IngestionRequest;

fn submit(world: &mut IngestionWorld, text: &str) {
    let request = IngestionRequest::new(text, world.project, REQUESTER);
    let intake = world.intake();
    world.last_result = Some(run_async(intake.create_from_text(&request)));
}

#[when(r#"the user submits "{text}""#)]
fn user_submits(world: &mut IngestionWorld, text: String) {
    submit(world, &text);
}

#[when("the user submits blank text")]
fn user_submits_blank_text(world: &mut IngestionWorld) {
    submit(world, "   ");
}
