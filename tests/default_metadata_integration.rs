//! Integration tests for the default metadata transformers.
//!
//! Each scenario runs through the acceptance harness, so every transformer
//! is exercised as a structured message, a binary message and an event.

use chrono::{Duration, Utc};
use event_binding::{
    binding::{
        harness::{self, Expectation},
        pipeline::Pipeline,
        transformer::{AddTimeNow, SetUuid, Transformers},
    },
    event::domain::Event,
};
use tracing::debug_span;
use uuid::Uuid;

fn check_uuid_id(event: &Event) -> Result<(), String> {
    if event.id().is_empty() {
        return Err("id is empty".to_owned());
    }
    Uuid::parse_str(event.id())
        .map(|_| ())
        .map_err(|err| format!("id {:?} is not a UUID: {err}", event.id()))
}

fn expect_uuid_id() -> Expectation {
    Expectation::check(check_uuid_id)
}

fn run(name: &str, input: &Event, transformers: &Transformers, expectation: &Expectation) {
    let span = debug_span!("scenario", name);
    let _entered = span.enter();
    let cases = harness::cases_for_all_encodings(name, input, transformers, expectation)
        .expect("fixture encodes");
    if let Err(report) = harness::run_transformer_cases(&Pipeline::default(), cases) {
        panic!("{report}");
    }
}

// ============================================================================
// SetUuid
// ============================================================================

#[test_log::test]
fn set_uuid_fills_an_empty_id() {
    let input = harness::min_event().with_id("");
    let transformers = Transformers::new().with(SetUuid::default());

    run("set uuid on empty id", &input, &transformers, &expect_uuid_id());
}

#[test_log::test]
fn set_uuid_keeps_an_existing_uuid() {
    let input = harness::min_event().with_id(Uuid::new_v4().to_string());
    let transformers = Transformers::new().with(SetUuid::default());

    run(
        "set uuid when id already exists",
        &input,
        &transformers,
        &Expectation::event(input.clone()),
    );
}

// ============================================================================
// AddTimeNow
// ============================================================================

#[test_log::test]
fn add_time_now_keeps_an_existing_time() {
    let input = harness::min_event().with_time(Utc::now() + Duration::hours(2));
    let transformers = Transformers::new().with(AddTimeNow::default());

    run(
        "no change to time",
        &input,
        &transformers,
        &Expectation::event(input.clone()),
    );
}

#[test_log::test]
fn add_time_now_fills_a_missing_time() {
    let input = harness::min_event();
    let before = Utc::now();
    let transformers = Transformers::new().with(AddTimeNow::default());
    let expect_time = Expectation::check(move |event| match event.time() {
        Some(time) if time >= before => Ok(()),
        other => Err(format!("expected a time after {before}, found {other:?}")),
    });

    run("add time now", &input, &transformers, &expect_time);
}

// ============================================================================
// Both transformers
// ============================================================================

#[test_log::test]
fn default_metadata_completes_a_bare_event() {
    let mut input = harness::full_event().with_id("");
    input.clear_time();
    let before = Utc::now();
    let transformers = Transformers::new()
        .with(SetUuid::default())
        .with(AddTimeNow::default());
    let expectation = Expectation::check(move |event| {
        check_uuid_id(event)?;
        if event.time().is_none_or(|time| time < before) {
            return Err(format!("time {:?} predates the run", event.time()));
        }
        if event.extension("traceparent").is_none() {
            return Err("extensions were dropped".to_owned());
        }
        Ok(())
    });

    run(
        "complete bare event",
        &input,
        &transformers,
        &expectation,
    );
}

#[test_log::test]
fn default_metadata_leaves_a_complete_event_alone() {
    let input = harness::full_event().with_id("abc-123");
    let transformers = Transformers::new()
        .with(SetUuid::default())
        .with(AddTimeNow::default());

    run(
        "complete event unchanged",
        &input,
        &transformers,
        &Expectation::event(input.clone()),
    );
}
