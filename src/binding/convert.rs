//! The encoder/decoder bridge between messages and events.
//!
//! [`to_event`] is the one decode path: every piece of transformer-aware
//! code goes through it. [`encode_as`] is its inverse for any target
//! encoding.

use super::{
    Encoding,
    adapters::{FormatRegistry, is_json_content_type},
    attributes::{
        self, DATA_CONTENT_TYPE, ID, SOURCE, SPEC_VERSION, SUBJECT, TIME, TYPE, format_time,
        parse_time,
    },
    error::{BindingResult, DecodeError, EncodeError},
    message::{BinaryMessage, BinaryWriter, Message, StructuredMessage, StructuredWriter},
};
use crate::event::domain::{Data, Event, SpecVersion};
use tracing::debug;

/// Decodes any message into an event.
///
/// Event-backed messages are unwrapped without copying. Structured
/// messages are decoded by the format registered for their tag. Binary
/// messages have their attributes mapped back through the naming
/// convention of [`crate::binding::attributes`]. Their payload becomes JSON
/// data when the content type is JSON and the bytes parse, and binary data
/// otherwise.
///
/// # Errors
///
/// Returns [`DecodeError`] (wrapped in
/// [`crate::binding::error::BindingError::Decode`]) when the format is
/// unknown or the content is malformed.
///
/// # Examples
///
/// ```
/// use event_binding::binding::{adapters::FormatRegistry, convert, message::BinaryMessage};
///
/// let message = BinaryMessage::new()
///     .with_metadata("ce-specversion", "1.0")
///     .with_metadata("ce-id", "abc-123")
///     .with_metadata("ce-source", "/jobs")
///     .with_metadata("ce-type", "job.done");
/// let event = convert::to_event(message.into(), &FormatRegistry::new()).expect("decodable");
/// assert_eq!(event.id(), "abc-123");
/// ```
pub fn to_event(message: Message, registry: &FormatRegistry) -> BindingResult<Event> {
    let encoding = message.encoding();
    debug!(%encoding, "decoding message into event");
    match encoding {
        Encoding::Event => message.read_event(),
        Encoding::Structured => message.read_structured(FormatDecoder { registry }),
        Encoding::Binary => message.read_binary(BinaryDecoder::default()),
    }
}

/// Encodes an event as a structured message in the given format.
///
/// # Errors
///
/// Returns [`EncodeError::UnknownFormat`] if no codec is registered for
/// `format`, or the codec's own error.
pub fn to_structured(
    event: &Event,
    registry: &FormatRegistry,
    format: &str,
) -> BindingResult<StructuredMessage> {
    let codec = registry
        .lookup(format)
        .ok_or_else(|| EncodeError::UnknownFormat(format.to_owned()))?;
    let payload = codec.encode(event)?;
    Ok(StructuredMessage::new(format, payload))
}

/// Encodes an event as a binary message.
///
/// Required attributes are always written, even when empty; optional ones
/// only when set. Extension values travel in their string form.
#[must_use]
pub fn to_binary(mut event: Event) -> BinaryMessage {
    let version = event.spec_version();
    let mut message = BinaryMessage::new();

    message.insert_metadata(attributes::metadata_key(SPEC_VERSION), version.as_str());
    message.insert_metadata(attributes::metadata_key(ID), event.id());
    message.insert_metadata(attributes::metadata_key(SOURCE), event.source());
    message.insert_metadata(attributes::metadata_key(TYPE), event.ty());
    if let Some(time) = event.time() {
        message.insert_metadata(attributes::metadata_key(TIME), format_time(time));
    }
    if let Some(schema) = event.data_schema() {
        message.insert_metadata(
            attributes::metadata_key(version.data_schema_attribute()),
            schema,
        );
    }
    if let Some(subject) = event.subject() {
        message.insert_metadata(attributes::metadata_key(SUBJECT), subject);
    }
    for (name, value) in event.extensions() {
        message.insert_metadata(attributes::metadata_key(name), value.to_string());
    }

    if let Some(content_type) = event.data_content_type() {
        message = message.with_content_type(content_type);
    }
    if let Some(data) = event.take_data() {
        message = message.with_payload(data.into_bytes());
    }
    message
}

/// Encodes an event into the requested message variant.
///
/// `format` names the structured format and is ignored for the other
/// variants. [`Encoding::Event`] wraps the event with no encoding step.
///
/// # Errors
///
/// Returns the errors of [`to_structured`] for structured targets.
pub fn encode_as(
    event: Event,
    encoding: Encoding,
    registry: &FormatRegistry,
    format: &str,
) -> BindingResult<Message> {
    debug!(%encoding, "encoding event into message");
    match encoding {
        Encoding::Event => Ok(Message::from(event)),
        Encoding::Structured => to_structured(&event, registry, format).map(Message::from),
        Encoding::Binary => Ok(Message::from(to_binary(event))),
    }
}

struct FormatDecoder<'a> {
    registry: &'a FormatRegistry,
}

impl StructuredWriter for FormatDecoder<'_> {
    type Output = Event;

    fn write_structured(self, format: &str, payload: Vec<u8>) -> BindingResult<Event> {
        let codec = self
            .registry
            .lookup(format)
            .ok_or_else(|| DecodeError::UnknownFormat(format.to_owned()))?;
        Ok(codec.decode(&payload)?)
    }
}

/// Rebuilds an event from binary-mode attributes.
///
/// The spec version arrives first, so the version-dependent schema name is
/// known by the time any other attribute is seen.
#[derive(Default)]
struct BinaryDecoder {
    event: Event,
    version_seen: bool,
}

impl BinaryWriter for BinaryDecoder {
    type Output = Event;

    fn set_attribute(&mut self, name: &str, value: &str) -> BindingResult<()> {
        let version = self.event.spec_version();
        match name {
            SPEC_VERSION => {
                self.event
                    .set_spec_version(SpecVersion::try_from(value).map_err(DecodeError::from)?);
                self.version_seen = true;
            }
            ID => self.event.set_id(value),
            SOURCE => self.event.set_source(value),
            TYPE => self.event.set_type(value),
            TIME => self.event.set_time(parse_time(value)?),
            DATA_CONTENT_TYPE => self.event.set_data_content_type(Some(value.to_owned())),
            SUBJECT => self.event.set_subject(Some(value.to_owned())),
            schema if schema == version.data_schema_attribute() => {
                self.event.set_data_schema(Some(value.to_owned()));
            }
            extension => self
                .event
                .set_extension(extension, value)
                .map_err(|err| DecodeError::invalid_attribute(extension, err.to_string()))?,
        }
        Ok(())
    }

    fn set_data(mut self, data: Option<Vec<u8>>) -> BindingResult<Event> {
        if !self.version_seen {
            return Err(DecodeError::MissingAttribute(SPEC_VERSION).into());
        }
        let is_json = self
            .event
            .data_content_type()
            .is_some_and(is_json_content_type);
        let data = data.map(|bytes| {
            if is_json {
                json_or_binary(bytes)
            } else {
                Data::Binary(bytes)
            }
        });
        self.event.set_data(data);
        Ok(self.event)
    }
}

fn json_or_binary(bytes: Vec<u8>) -> Data {
    match serde_json::from_slice(&bytes) {
        Ok(value) => Data::Json(value),
        Err(err) => {
            debug!(%err, "payload declared as JSON does not parse; keeping bytes");
            Data::Binary(bytes)
        }
    }
}
