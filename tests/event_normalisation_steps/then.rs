//! Then steps for event normalisation BDD scenarios.

use super::world::NormalisationWorld;
use event_binding::{
    binding::{Encoding, error::BindingError},
    event::error::ValidationError,
};
use rstest_bdd_macros::then;
use uuid::Uuid;

fn expect_encoding(world: &NormalisationWorld, expected: Encoding) -> Result<(), eyre::Report> {
    let actual = world.output()?.encoding();
    if actual != expected {
        return Err(eyre::eyre!("expected a {expected} message, found {actual}"));
    }
    Ok(())
}

#[then("the output is a structured message")]
fn output_is_structured(world: &NormalisationWorld) -> Result<(), eyre::Report> {
    expect_encoding(world, Encoding::Structured)
}

#[then("the output is a binary message")]
fn output_is_binary(world: &NormalisationWorld) -> Result<(), eyre::Report> {
    expect_encoding(world, Encoding::Binary)
}

#[then("the output id is a UUID")]
fn output_id_is_uuid(world: &NormalisationWorld) -> Result<(), eyre::Report> {
    let event = world.output_event()?;
    Uuid::parse_str(event.id())
        .map(|_| ())
        .map_err(|err| eyre::eyre!("id {:?} is not a UUID: {err}", event.id()))
}

#[then(r#"the output id is "{id}""#)]
fn output_id_is(world: &NormalisationWorld, id: String) -> Result<(), eyre::Report> {
    let event = world.output_event()?;
    if event.id() != id {
        return Err(eyre::eyre!("expected id {id:?}, found {:?}", event.id()));
    }
    Ok(())
}

#[then("the output time is no earlier than the run")]
fn output_time_after_run(world: &NormalisationWorld) -> Result<(), eyre::Report> {
    let started = world
        .run_started
        .ok_or_else(|| eyre::eyre!("missing run start time in scenario world"))?;
    let event = world.output_event()?;
    match event.time() {
        Some(time) if time >= started => Ok(()),
        other => Err(eyre::eyre!("expected a time after {started}, found {other:?}")),
    }
}

#[then("the output time equals the input time")]
fn output_time_equals_input(world: &NormalisationWorld) -> Result<(), eyre::Report> {
    let event = world.output_event()?;
    if event.time() != world.event.time() {
        return Err(eyre::eyre!(
            "expected time {:?}, found {:?}",
            world.event.time(),
            event.time()
        ));
    }
    Ok(())
}

#[then("the output is byte-identical to the input")]
fn output_is_identical(world: &NormalisationWorld) -> Result<(), eyre::Report> {
    let input = world
        .input
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing input message in scenario world"))?;
    if world.output()? != input {
        return Err(eyre::eyre!("passthrough changed the message"));
    }
    Ok(())
}

#[then("the pipeline fails with a missing id error")]
fn pipeline_fails_missing_id(world: &NormalisationWorld) -> Result<(), eyre::Report> {
    let result = world
        .result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("pipeline has not run in scenario world"))?;
    if !matches!(
        result,
        Err(BindingError::Validation(ValidationError::MissingId))
    ) {
        return Err(eyre::eyre!("expected a missing id error, got {result:?}"));
    }
    Ok(())
}
