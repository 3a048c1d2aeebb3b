//! Structured-mode messages: one serialised event under a format tag.

use crate::binding::error::BindingResult;

/// Visitor receiving the content of a structured message.
///
/// The writer is taken by value, so it is invoked exactly once per read.
pub trait StructuredWriter {
    /// What the writer produces.
    type Output;

    /// Receives the format tag and the complete serialised event.
    ///
    /// # Errors
    ///
    /// Implementations return [`crate::binding::error::BindingError`] when
    /// they cannot consume the payload.
    fn write_structured(self, format: &str, payload: Vec<u8>) -> BindingResult<Self::Output>;
}

/// A message carrying a complete serialised event in one payload.
///
/// The payload bytes are kept exactly as received; the message never
/// inspects them.
///
/// # Examples
///
/// ```
/// use event_binding::binding::message::StructuredMessage;
///
/// let message = StructuredMessage::new("application/cloudevents+json", b"{}".to_vec());
/// assert_eq!(message.format(), "application/cloudevents+json");
/// assert_eq!(message.payload(), b"{}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredMessage {
    format: String,
    payload: Vec<u8>,
}

impl StructuredMessage {
    /// Creates a structured message.
    #[must_use]
    pub fn new(format: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            format: format.into(),
            payload,
        }
    }

    /// Returns the format tag.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Returns the serialised event.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Splits the message into its format tag and payload.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.format, self.payload)
    }

    pub(super) fn read_into<W: StructuredWriter>(self, writer: W) -> BindingResult<W::Output> {
        writer.write_structured(&self.format, self.payload)
    }
}
