//! The transport-shaped message and its consuming reads.
//!
//! [`Message`] is a closed set of three variants. Every read takes the
//! message by value, so a message that has been read cannot be read again;
//! callers that need the content twice clone first.

mod binary;
mod structured;

pub use binary::{BinaryMessage, BinaryWriter};
pub use structured::{StructuredMessage, StructuredWriter};

use super::{
    Encoding,
    error::{BindingError, BindingResult},
};
use crate::event::domain::Event;

/// An event in one of its wire shapes.
///
/// # Examples
///
/// ```
/// use event_binding::binding::{Encoding, message::Message};
/// use event_binding::event::domain::Event;
///
/// let message = Message::from(Event::new().with_id("abc-123"));
/// assert_eq!(message.encoding(), Encoding::Event);
///
/// let event = message.read_event().expect("event-backed message");
/// assert_eq!(event.id(), "abc-123");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A serialised event under a format tag.
    Structured(StructuredMessage),
    /// Attributes as transport metadata with a separate payload.
    Binary(BinaryMessage),
    /// An in-memory event; no encoding step is needed to read it.
    Event(Box<Event>),
}

impl Message {
    /// Returns the encoding of this message without reading it.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        match self {
            Self::Structured(_) => Encoding::Structured,
            Self::Binary(_) => Encoding::Binary,
            Self::Event(_) => Encoding::Event,
        }
    }

    /// Reads a structured message, handing its content to `writer` once.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::EncodingMismatch`] if the message is not
    /// structured, or whatever error the writer reports.
    pub fn read_structured<W: StructuredWriter>(self, writer: W) -> BindingResult<W::Output> {
        match self {
            Self::Structured(message) => message.read_into(writer),
            other => Err(BindingError::mismatch(
                Encoding::Structured,
                other.encoding(),
            )),
        }
    }

    /// Reads a binary message, handing each attribute then the payload to
    /// `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::EncodingMismatch`] if the message is not
    /// binary, or whatever error the writer reports.
    pub fn read_binary<W: BinaryWriter>(self, writer: W) -> BindingResult<W::Output> {
        match self {
            Self::Binary(message) => message.read_into(writer),
            other => Err(BindingError::mismatch(Encoding::Binary, other.encoding())),
        }
    }

    /// Returns the wrapped event of an event-backed message.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::EncodingMismatch`] for any other variant.
    pub fn read_event(self) -> BindingResult<Event> {
        match self {
            Self::Event(event) => Ok(*event),
            other => Err(BindingError::mismatch(Encoding::Event, other.encoding())),
        }
    }
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Self::Event(Box::new(event))
    }
}

impl From<StructuredMessage> for Message {
    fn from(message: StructuredMessage) -> Self {
        Self::Structured(message)
    }
}

impl From<BinaryMessage> for Message {
    fn from(message: BinaryMessage) -> Self {
        Self::Binary(message)
    }
}
