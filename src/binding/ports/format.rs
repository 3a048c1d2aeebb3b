//! Format codec port for structured-mode messages.

use crate::{
    binding::error::{DecodeResult, EncodeError},
    event::domain::Event,
};

/// Port for a structured event format.
///
/// A format owns the complete wire shape of an event in structured mode.
/// The bridge hands it payload bytes and never looks inside them itself.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Be stateless and thread-safe
/// - Encode deterministically, so that decoding and re-encoding an
///   unchanged event reproduces the same bytes
pub trait EventFormat: Send + Sync {
    /// Returns the media type naming this format.
    fn media_type(&self) -> &str;

    /// Serialises an event.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the event cannot be represented.
    fn encode(&self, event: &Event) -> Result<Vec<u8>, EncodeError>;

    /// Parses an event.
    ///
    /// # Errors
    ///
    /// Returns [`crate::binding::error::DecodeError`] if the bytes do not
    /// conform to the format.
    fn decode(&self, payload: &[u8]) -> DecodeResult<Event>;
}
