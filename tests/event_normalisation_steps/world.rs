//! Shared world state for event normalisation BDD scenarios.

use chrono::{DateTime, Utc};
use event_binding::{
    binding::{
        error::BindingError, message::Message, pipeline::Pipeline, transformer::Transformers,
    },
    event::domain::Event,
};
use rstest::fixture;

/// Scenario world for normalisation behaviour tests.
pub struct NormalisationWorld {
    pub pipeline: Pipeline,
    pub event: Event,
    pub input: Option<Message>,
    pub run_started: Option<DateTime<Utc>>,
    pub result: Option<Result<Message, BindingError>>,
}

impl NormalisationWorld {
    /// Creates a world with a default pipeline and an empty event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::default(),
            event: Event::new(),
            input: None,
            run_started: None,
            result: None,
        }
    }

    /// Returns the pipeline output, failing if the run errored.
    pub fn output(&self) -> Result<&Message, eyre::Report> {
        match self.result.as_ref() {
            Some(Ok(message)) => Ok(message),
            Some(Err(err)) => Err(eyre::eyre!("pipeline failed: {err}")),
            None => Err(eyre::eyre!("pipeline has not run in scenario world")),
        }
    }

    /// Decodes the pipeline output into an event.
    pub fn output_event(&self) -> Result<Event, eyre::Report> {
        let message = self.output()?.clone();
        self.pipeline
            .apply_to_event(message, &Transformers::new())
            .map_err(|err| eyre::eyre!("output does not decode: {err}"))
    }
}

impl Default for NormalisationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> NormalisationWorld {
    NormalisationWorld::default()
}
