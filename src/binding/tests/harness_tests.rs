//! Unit tests for the transformer acceptance harness.

use crate::{
    binding::{
        harness::{
            self, CaseFailure, Expectation, HarnessReport, TransformerCase,
        },
        message::Message,
        pipeline::Pipeline,
        transformer::{FnTransformer, SetExtension, SetUuid, Transformers},
    },
    event::domain::{Data, Event, ExtensionValue},
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn pipeline() -> Pipeline {
    Pipeline::default()
}

fn tag_transformers() -> Transformers {
    Transformers::new().with(SetExtension::new("tenant", "blue"))
}

// ============================================================================
// Expectations
// ============================================================================

#[rstest]
fn equality_expectation_passes_for_every_encoding(pipeline: Pipeline) {
    let input = harness::full_event();
    let expected = input
        .clone()
        .with_extension("tenant", "blue")
        .expect("valid extension");

    let cases = harness::cases_for_all_encodings(
        "tag tenant",
        &input,
        &tag_transformers(),
        &Expectation::event(expected),
    )
    .expect("fixture encodes");

    assert_eq!(cases.len(), 3);
    assert_eq!(harness::run_transformer_cases(&pipeline, cases), Ok(()));
}

#[rstest]
fn check_expectation_accepts_generated_values(pipeline: Pipeline) {
    let transformers = Transformers::new().with(SetUuid::default());
    let has_id = Expectation::check(|event| {
        if event.id().is_empty() {
            Err("id is empty".to_owned())
        } else {
            Ok(())
        }
    });

    let cases = harness::cases_for_all_encodings(
        "generate id",
        &harness::min_event().with_id(""),
        &transformers,
        &has_id,
    )
    .expect("fixture encodes");

    assert_eq!(harness::run_transformer_cases(&pipeline, cases), Ok(()));
}

#[rstest]
fn message_case_runs_only_the_pipeline(pipeline: Pipeline) {
    let case = TransformerCase::message(
        "binary only",
        harness::binary_message(harness::min_event()),
        tag_transformers(),
        Expectation::check(|event| match event.extension("tenant") {
            Some(value) if value.as_str() == Some("blue") => Ok(()),
            other => Err(format!("tenant is {other:?}")),
        }),
    );

    assert_eq!(case.name(), "binary only");
    assert_eq!(harness::run_transformer_cases(&pipeline, [case]), Ok(()));
}

// ============================================================================
// Failures
// ============================================================================

#[rstest]
fn every_failing_case_is_reported(pipeline: Pipeline) {
    let cases = harness::cases_for_all_encodings(
        "wrong expectation",
        &harness::min_event(),
        &tag_transformers(),
        &Expectation::event(harness::min_event()),
    )
    .expect("fixture encodes");

    let report = harness::run_transformer_cases(&pipeline, cases).expect_err("cases fail");

    let names: Vec<&str> = report.0.iter().map(|failure| failure.case.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "wrong expectation (structured)",
            "wrong expectation (binary)",
            "wrong expectation (event)",
        ]
    );
    assert!(report.0.iter().all(|failure| failure.reason.contains("extensions")));
}

#[rstest]
fn direct_fold_failure_names_the_path(pipeline: Pipeline) {
    let case = TransformerCase::event(
        "broken transformer",
        harness::min_event(),
        Transformers::new().with(FnTransformer::new("broken", |_event: Event| {
            Err(crate::binding::error::TransformError::new("broken", "always fails"))
        })),
        Expectation::event(harness::min_event()),
    );

    let report = harness::run_transformer_cases(&pipeline, [case]).expect_err("case fails");

    assert_eq!(report.0.len(), 1);
    assert!(report.0[0].reason.starts_with("direct fold failed"));
}

#[rstest]
fn pipeline_failure_names_the_encoding(pipeline: Pipeline) {
    let case = TransformerCase::message(
        "invalid output",
        Message::from(harness::min_event().with_source("")),
        tag_transformers(),
        Expectation::event(harness::min_event()),
    );

    let report = harness::run_transformer_cases(&pipeline, [case]).expect_err("case fails");

    assert!(report.0[0].reason.starts_with("event pipeline failed"));
}

#[rstest]
fn report_lists_failures_in_display() {
    let report = HarnessReport(vec![
        CaseFailure {
            case: "a".to_owned(),
            reason: "id differs".to_owned(),
        },
        CaseFailure {
            case: "b".to_owned(),
            reason: "time differs".to_owned(),
        },
    ]);

    assert_eq!(
        report.to_string(),
        "2 transformer case(s) failed: a: id differs; b: time differs"
    );
}

// ============================================================================
// Equivalence
// ============================================================================

#[rstest]
fn equivalence_ignores_extension_and_data_types() {
    let typed = harness::min_event()
        .with_extension("retries", 3_i64)
        .expect("valid extension")
        .with_data(Data::Text("hello".to_owned()));
    let untyped = harness::min_event()
        .with_extension("retries", "3")
        .expect("valid extension")
        .with_data(Data::Binary(b"hello".to_vec()));

    assert_eq!(harness::assert_equivalent(&typed, &untyped), Ok(()));
}

#[rstest]
#[case::id(harness::min_event().with_id("other"), "id")]
#[case::source(harness::min_event().with_source("/elsewhere"), "source")]
#[case::time(harness::min_event().with_time(harness::reference_time()), "time")]
#[case::subject(harness::min_event().with_subject("s"), "subject")]
#[case::extension(
    harness::min_event().with_extension("flag", ExtensionValue::Boolean(true)).expect("valid"),
    "extensions"
)]
#[case::data(harness::min_event().with_data(json!({"n": 1})), "data")]
fn equivalence_reports_the_differing_attribute(#[case] actual: Event, #[case] attribute: &str) {
    let reason = harness::assert_equivalent(&harness::min_event(), &actual)
        .expect_err("events differ");
    assert!(reason.starts_with(attribute), "{reason}");
}

// ============================================================================
// Fixtures
// ============================================================================

#[rstest]
fn full_event_extension_passes_the_checked_setter() {
    let event = harness::full_event();
    let value = event
        .extension("traceparent")
        .cloned()
        .expect("fixture carries traceparent");

    let mut rebuilt = event.clone();
    rebuilt.remove_extension("traceparent");
    rebuilt
        .set_extension("traceparent", value)
        .expect("fixture extension name is valid");

    assert_eq!(rebuilt, event);
    assert_eq!(event.validate(), Ok(()));
}
