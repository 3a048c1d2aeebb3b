//! The transformation pipeline runner.
//!
//! A pipeline decodes a message only when there is work to do. With no
//! transformers the message is returned untouched, so its original bytes
//! and format survive exactly. Otherwise the message is decoded through
//! [`convert::to_event`], folded through the transformers, optionally
//! validated, and re-encoded. A run whose transformers change nothing also
//! hands back the input message itself.

use super::{
    Encoding,
    adapters::FormatRegistry,
    config::PipelineConfig,
    convert,
    error::BindingResult,
    message::Message,
    transformer::Transformers,
};
use crate::event::domain::Event;
use tracing::{debug, debug_span, trace};

/// Applies transformer lists to messages.
///
/// A pipeline holds only read-only state, so one instance can serve many
/// threads at once; each run owns the message and events it works on.
///
/// # Examples
///
/// ```
/// use event_binding::binding::{
///     Encoding, convert, message::Message, pipeline::Pipeline,
///     transformer::{AddTimeNow, SetUuid, Transformers},
/// };
/// use event_binding::event::domain::Event;
///
/// let pipeline = Pipeline::default();
/// let transformers = Transformers::new()
///     .with(SetUuid::default())
///     .with(AddTimeNow::default());
///
/// let input = Message::from(convert::to_binary(
///     Event::new().with_source("/jobs").with_type("job.done"),
/// ));
/// let output = pipeline.apply(input, &transformers).expect("pipeline succeeds");
/// assert_eq!(output.encoding(), Encoding::Binary);
///
/// let event = pipeline.apply_to_event(output, &Transformers::new()).expect("decodable");
/// assert!(!event.id().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    registry: FormatRegistry,
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline over a format registry and configuration.
    #[must_use]
    pub const fn new(registry: FormatRegistry, config: PipelineConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the format registry.
    #[must_use]
    pub const fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Applies `transformers` and returns a message of the input's variant.
    ///
    /// With an empty list the input is returned as-is with no decode or
    /// re-encode. When the transformers leave the event unchanged the input
    /// is also returned as-is. Otherwise a structured input is re-encoded in
    /// its own format and a binary input keeps its transport metadata.
    ///
    /// # Errors
    ///
    /// Returns [`crate::binding::error::BindingError`] when decoding,
    /// a transformer, validation or re-encoding fails. The input has been
    /// consumed either way; retrying needs a clone taken beforehand.
    pub fn apply(&self, message: Message, transformers: &Transformers) -> BindingResult<Message> {
        let encoding = message.encoding();
        let span = debug_span!("pipeline.apply", %encoding, transformers = transformers.len());
        let _entered = span.enter();

        if transformers.is_empty() {
            trace!("no transformers; passing message through");
            return Ok(message);
        }

        let format = match &message {
            Message::Structured(structured) => structured.format().to_owned(),
            Message::Binary(_) | Message::Event(_) => self.config.structured_format.clone(),
        };
        self.reencode(message, transformers, encoding, &format)
    }

    /// Applies `transformers` and returns the resulting event.
    ///
    /// The message is always decoded, even when the list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::binding::error::BindingError`] when decoding,
    /// a transformer or validation fails.
    pub fn apply_to_event(
        &self,
        message: Message,
        transformers: &Transformers,
    ) -> BindingResult<Event> {
        let span = debug_span!(
            "pipeline.apply_to_event",
            encoding = %message.encoding(),
            transformers = transformers.len()
        );
        let _entered = span.enter();
        let event = convert::to_event(message, &self.registry)?;
        self.transform(event, transformers)
    }

    /// Applies `transformers` and writes the result in the `target` variant.
    ///
    /// When the target matches the input and the list is empty, or the
    /// transformers change nothing, this is the identity. Structured targets
    /// use the configured structured format.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Pipeline::apply`].
    pub fn write(
        &self,
        message: Message,
        target: Encoding,
        transformers: &Transformers,
    ) -> BindingResult<Message> {
        let encoding = message.encoding();
        let span = debug_span!(
            "pipeline.write",
            %encoding,
            %target,
            transformers = transformers.len()
        );
        let _entered = span.enter();

        if transformers.is_empty() && encoding == target {
            trace!("target matches input and no transformers; passing message through");
            return Ok(message);
        }

        let format = self.config.structured_format.clone();
        self.reencode(message, transformers, target, &format)
    }

    fn reencode(
        &self,
        message: Message,
        transformers: &Transformers,
        target: Encoding,
        format: &str,
    ) -> BindingResult<Message> {
        let retained = message.clone();
        let decoded = convert::to_event(message, &self.registry)?;
        let transformed = self.transform(decoded.clone(), transformers)?;

        if transformed == decoded && retained.encoding() == target {
            trace!("transformers left the event unchanged; returning input message");
            return Ok(retained);
        }

        let output = convert::encode_as(transformed, target, &self.registry, format)?;
        Ok(carry_transport_metadata(&retained, output))
    }

    fn transform(&self, event: Event, transformers: &Transformers) -> BindingResult<Event> {
        debug!(transformers = ?transformers, "applying transformers");
        let transformed = transformers.apply(event)?;
        if self.config.validate_output {
            transformed.validate()?;
        }
        Ok(transformed)
    }
}

fn carry_transport_metadata(input: &Message, output: Message) -> Message {
    match (input, output) {
        (Message::Binary(source), Message::Binary(mut binary)) => {
            for (key, value) in source.transport_metadata() {
                binary.insert_metadata(key, value);
            }
            Message::Binary(binary)
        }
        (_, other) => other,
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(FormatRegistry::new(), PipelineConfig::default())
    }
}
