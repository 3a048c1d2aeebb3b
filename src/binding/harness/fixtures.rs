//! Reference events and message builders for transformer tests.

use crate::{
    binding::{
        adapters::{JSON_FORMAT, JsonFormat},
        convert,
        error::BindingResult,
        message::{Message, StructuredMessage},
        ports::EventFormat,
    },
    event::domain::Event,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

const TRACEPARENT_EXTENSION: &str = "traceparent";
const TRACEPARENT: &str = "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01";

/// Returns the smallest valid event: id, source and type only.
#[must_use]
pub fn min_event() -> Event {
    Event::new()
        .with_id("min-event-0001")
        .with_source("/harness/source")
        .with_type("com.example.harness.min")
}

/// Returns an event with every attribute, an extension and a JSON payload.
#[must_use]
pub fn full_event() -> Event {
    min_event()
        .with_id("full-event-0001")
        .with_type("com.example.harness.full")
        .with_time(reference_time())
        .with_data_content_type("application/json")
        .with_data_schema("https://example.com/schemas/full.json")
        .with_subject("harness")
        .with_data(json!({"count": 3, "greeting": "hello"}))
        .with_known_extension(TRACEPARENT_EXTENSION, TRACEPARENT)
}

/// Returns the fixed timestamp used by [`full_event`].
#[must_use]
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Encodes an event as a structured JSON message.
///
/// # Errors
///
/// Returns [`crate::binding::error::BindingError::Encode`] if the event
/// cannot be serialised.
pub fn structured_message(event: &Event) -> BindingResult<Message> {
    let payload = JsonFormat.encode(event)?;
    Ok(Message::from(StructuredMessage::new(JSON_FORMAT, payload)))
}

/// Encodes an event as a binary message.
#[must_use]
pub fn binary_message(event: Event) -> Message {
    Message::from(convert::to_binary(event))
}
