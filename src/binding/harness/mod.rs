//! Acceptance harness for transformers.
//!
//! A transformer is only correct if it behaves the same whichever way an
//! event arrives. The harness runs one logical input through the pipeline
//! as a structured message, a binary message and an event-backed message,
//! and, for event inputs, straight through the transformer list as well.
//!
//! Outputs are checked one of two ways: equivalence with a fully specified
//! expected event, or a check function for outputs that are not
//! deterministic, such as generated ids or the current time.
//!
//! # Example
//!
//! ```
//! use event_binding::binding::{
//!     harness::{self, Expectation, TransformerCase},
//!     pipeline::Pipeline,
//!     transformer::{AddTimeNow, Transformers},
//! };
//!
//! let transformers = Transformers::new().with(AddTimeNow::default());
//! let has_time = Expectation::check(|event| {
//!     event.time().map(|_| ()).ok_or_else(|| "time is missing".to_owned())
//! });
//!
//! let cases = harness::cases_for_all_encodings(
//!     "add time",
//!     &harness::min_event(),
//!     &transformers,
//!     &has_time,
//! )
//! .expect("fixture encodes");
//! harness::run_transformer_cases(&Pipeline::default(), cases).expect("all cases pass");
//! ```

mod fixtures;

pub use fixtures::{
    binary_message, full_event, min_event, reference_time, structured_message,
};

use super::{
    convert,
    error::BindingResult,
    message::Message,
    pipeline::Pipeline,
    transformer::Transformers,
};
use crate::event::domain::{Data, Event};
use std::{fmt, sync::Arc};
use thiserror::Error;
use tracing::debug;

/// Check function for outputs that cannot be compared exactly.
pub type Check = Arc<dyn Fn(&Event) -> Result<(), String> + Send + Sync>;

/// How a case's output is judged.
#[derive(Clone)]
pub enum Expectation {
    /// The output must be equivalent to this event.
    Event(Box<Event>),
    /// The output must satisfy this check.
    Check(Check),
}

impl Expectation {
    /// Expects an output equivalent to `event`.
    #[must_use]
    pub fn event(event: Event) -> Self {
        Self::Event(Box::new(event))
    }

    /// Expects an output accepted by `check`.
    #[must_use]
    pub fn check(check: impl Fn(&Event) -> Result<(), String> + Send + Sync + 'static) -> Self {
        Self::Check(Arc::new(check))
    }

    fn verify(&self, actual: &Event) -> Result<(), String> {
        match self {
            Self::Event(expected) => assert_equivalent(expected, actual),
            Self::Check(check) => check(actual),
        }
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => f.debug_tuple("Event").field(event).finish(),
            Self::Check(_) => f.write_str("Check(..)"),
        }
    }
}

/// What a case feeds to the pipeline.
#[derive(Debug, Clone)]
pub enum CaseInput {
    /// A message in any encoding.
    Message(Message),
    /// An event, run both as an event-backed message and directly through
    /// the transformer list.
    Event(Box<Event>),
}

/// One named transformer scenario.
#[derive(Debug, Clone)]
pub struct TransformerCase {
    name: String,
    input: CaseInput,
    transformers: Transformers,
    expectation: Expectation,
}

impl TransformerCase {
    /// Creates a case whose input is a message.
    #[must_use]
    pub fn message(
        name: impl Into<String>,
        message: Message,
        transformers: Transformers,
        expectation: Expectation,
    ) -> Self {
        Self {
            name: name.into(),
            input: CaseInput::Message(message),
            transformers,
            expectation,
        }
    }

    /// Creates a case whose input is an event.
    #[must_use]
    pub fn event(
        name: impl Into<String>,
        event: Event,
        transformers: Transformers,
        expectation: Expectation,
    ) -> Self {
        Self {
            name: name.into(),
            input: CaseInput::Event(Box::new(event)),
            transformers,
            expectation,
        }
    }

    /// Returns the case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn run(self, pipeline: &Pipeline) -> Result<(), String> {
        match self.input {
            CaseInput::Message(message) => {
                run_message(pipeline, message, &self.transformers, &self.expectation)
            }
            CaseInput::Event(event) => {
                let direct = self
                    .transformers
                    .apply((*event).clone())
                    .map_err(|err| format!("direct fold failed: {err}"))?;
                self.expectation
                    .verify(&direct)
                    .map_err(|reason| format!("direct fold: {reason}"))?;
                run_message(
                    pipeline,
                    Message::Event(event),
                    &self.transformers,
                    &self.expectation,
                )
            }
        }
    }
}

fn run_message(
    pipeline: &Pipeline,
    message: Message,
    transformers: &Transformers,
    expectation: &Expectation,
) -> Result<(), String> {
    let encoding = message.encoding();
    let output = pipeline
        .apply(message, transformers)
        .map_err(|err| format!("{encoding} pipeline failed: {err}"))?;
    if output.encoding() != encoding {
        return Err(format!(
            "{encoding} input came back as a {} message",
            output.encoding()
        ));
    }
    let event = convert::to_event(output, pipeline.registry())
        .map_err(|err| format!("{encoding} output does not decode: {err}"))?;
    expectation
        .verify(&event)
        .map_err(|reason| format!("{encoding} message: {reason}"))
}

/// Builds the three cases of one scenario: structured, binary and event.
///
/// # Errors
///
/// Returns an error if `event` cannot be encoded as a structured message.
pub fn cases_for_all_encodings(
    name: &str,
    event: &Event,
    transformers: &Transformers,
    expectation: &Expectation,
) -> BindingResult<Vec<TransformerCase>> {
    Ok(vec![
        TransformerCase::message(
            format!("{name} (structured)"),
            structured_message(event)?,
            transformers.clone(),
            expectation.clone(),
        ),
        TransformerCase::message(
            format!("{name} (binary)"),
            binary_message(event.clone()),
            transformers.clone(),
            expectation.clone(),
        ),
        TransformerCase::event(
            format!("{name} (event)"),
            event.clone(),
            transformers.clone(),
            expectation.clone(),
        ),
    ])
}

/// A case that did not meet its expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    /// The case name.
    pub case: String,
    /// What went wrong.
    pub reason: String,
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.case, self.reason)
    }
}

/// Every failure of one harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} transformer case(s) failed: {}", .0.len(), format_failures(.0))]
pub struct HarnessReport(pub Vec<CaseFailure>);

fn format_failures(failures: &[CaseFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Runs every case and reports all failures together.
///
/// # Errors
///
/// Returns a [`HarnessReport`] listing each failing case.
pub fn run_transformer_cases(
    pipeline: &Pipeline,
    cases: impl IntoIterator<Item = TransformerCase>,
) -> Result<(), HarnessReport> {
    let failures: Vec<CaseFailure> = cases
        .into_iter()
        .filter_map(|case| {
            let name = case.name.clone();
            debug!(case = %name, "running transformer case");
            case.run(pipeline)
                .err()
                .map(|reason| CaseFailure { case: name, reason })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(HarnessReport(failures))
    }
}

/// Compares two events across encodings.
///
/// Every attribute must match. Extension values are compared in their
/// string form and payloads by their bytes, because binary mode carries
/// neither type.
///
/// # Errors
///
/// Returns a description of the first difference.
pub fn assert_equivalent(expected: &Event, actual: &Event) -> Result<(), String> {
    fn differ<T: fmt::Debug + PartialEq>(name: &str, expected: T, actual: T) -> Result<(), String> {
        if expected == actual {
            Ok(())
        } else {
            Err(format!("{name}: expected {expected:?}, found {actual:?}"))
        }
    }

    differ("specversion", expected.spec_version(), actual.spec_version())?;
    differ("id", expected.id(), actual.id())?;
    differ("source", expected.source(), actual.source())?;
    differ("type", expected.ty(), actual.ty())?;
    differ("time", expected.time(), actual.time())?;
    differ(
        "datacontenttype",
        expected.data_content_type(),
        actual.data_content_type(),
    )?;
    differ("dataschema", expected.data_schema(), actual.data_schema())?;
    differ("subject", expected.subject(), actual.subject())?;

    let extensions = |event: &Event| -> Vec<(String, String)> {
        event
            .extensions()
            .iter()
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    };
    differ("extensions", extensions(expected), extensions(actual))?;

    differ(
        "data",
        expected.data().map(Data::to_bytes),
        actual.data().map(Data::to_bytes),
    )
}
