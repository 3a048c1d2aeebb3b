//! When steps for event normalisation BDD scenarios.

use super::world::NormalisationWorld;
use chrono::Utc;
use event_binding::binding::transformer::{AddTimeNow, SetUuid, Transformers};
use rstest_bdd_macros::when;

fn run(world: &mut NormalisationWorld, transformers: &Transformers) -> Result<(), eyre::Report> {
    let input = world
        .input
        .clone()
        .ok_or_else(|| eyre::eyre!("missing input message in scenario world"))?;
    world.run_started = Some(Utc::now());
    world.result = Some(world.pipeline.apply(input, transformers));
    Ok(())
}

#[when("the default metadata transformers are applied")]
fn default_metadata_applied(world: &mut NormalisationWorld) -> Result<(), eyre::Report> {
    let transformers = Transformers::new()
        .with(SetUuid::default())
        .with(AddTimeNow::default());
    run(world, &transformers)
}

#[when("only the time transformer is applied")]
fn time_transformer_applied(world: &mut NormalisationWorld) -> Result<(), eyre::Report> {
    run(world, &Transformers::new().with(AddTimeNow::default()))
}

#[when("no transformers are applied")]
fn no_transformers_applied(world: &mut NormalisationWorld) -> Result<(), eyre::Report> {
    run(world, &Transformers::new())
}
