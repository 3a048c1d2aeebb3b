//! Given steps for event normalisation BDD scenarios.

use super::world::NormalisationWorld;
use chrono::{Duration, Utc};
use event_binding::binding::harness;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an event with source "{source}" and type "{ty}""#)]
fn event_with_source_and_type(world: &mut NormalisationWorld, source: String, ty: String) {
    world.event.set_source(source);
    world.event.set_type(ty);
}

#[given("the event has no id")]
fn event_has_no_id(world: &mut NormalisationWorld) {
    world.event.set_id("");
}

#[given(r#"the event has id "{id}""#)]
fn event_has_id(world: &mut NormalisationWorld, id: String) {
    world.event.set_id(id);
}

#[given("the event time is {hours:i64} hours from now")]
fn event_time_from_now(world: &mut NormalisationWorld, hours: i64) {
    world.event.set_time(Utc::now() + Duration::hours(hours));
}

#[given("the event is encoded as a structured message")]
fn encoded_structured(world: &mut NormalisationWorld) -> Result<(), eyre::Report> {
    let message = harness::structured_message(&world.event)
        .wrap_err("encode scenario event as a structured message")?;
    world.input = Some(message);
    Ok(())
}

#[given("the event is encoded as a binary message")]
fn encoded_binary(world: &mut NormalisationWorld) {
    world.input = Some(harness::binary_message(world.event.clone()));
}
