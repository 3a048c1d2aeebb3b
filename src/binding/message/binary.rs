//! Binary-mode messages: attributes as transport metadata, payload apart.

use crate::binding::{
    attributes::{self, DATA_CONTENT_TYPE, SPEC_VERSION},
    error::BindingResult,
};
use std::collections::BTreeMap;

/// Visitor receiving the content of a binary message.
///
/// [`BinaryWriter::set_attribute`] is called once per attribute, with the
/// spec version first; [`BinaryWriter::set_data`] is then called exactly
/// once and ends the read.
pub trait BinaryWriter {
    /// What the writer produces.
    type Output;

    /// Receives one attribute, named without the transport prefix.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the value cannot be accepted;
    /// the read stops there.
    fn set_attribute(&mut self, name: &str, value: &str) -> BindingResult<()>;

    /// Receives the payload, or `None` when the message has none.
    ///
    /// # Errors
    ///
    /// Implementations return an error when they cannot complete.
    fn set_data(self, data: Option<Vec<u8>>) -> BindingResult<Self::Output>;
}

/// A message whose attributes travel as transport metadata.
///
/// Metadata keys follow the `ce-` naming convention of
/// [`crate::binding::attributes`]; keys without the prefix belong to the
/// transport and are carried but never read as attributes. The content type
/// has its own slot, as it would in a transport's content-type header.
///
/// # Examples
///
/// ```
/// use event_binding::binding::message::BinaryMessage;
///
/// let message = BinaryMessage::new()
///     .with_metadata("ce-specversion", "1.0")
///     .with_metadata("ce-id", "abc-123")
///     .with_content_type("text/plain")
///     .with_payload(b"hello".to_vec());
/// assert_eq!(message.metadata().get("ce-id").map(String::as_str), Some("abc-123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryMessage {
    metadata: BTreeMap<String, String>,
    content_type: Option<String>,
    payload: Option<Vec<u8>>,
}

impl BinaryMessage {
    /// Creates an empty binary message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a metadata entry under its transport key.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_metadata(key, value);
        self
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Adds a metadata entry, replacing any previous value for the key.
    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Returns the transport metadata.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Returns the metadata entries that belong to the transport rather than
    /// to the event.
    pub fn transport_metadata(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata
            .iter()
            .filter(|(key, _)| attributes::attribute_name(key).is_none())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the content type, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub(super) fn read_into<W: BinaryWriter>(self, mut writer: W) -> BindingResult<W::Output> {
        let mut named: Vec<(String, String)> = self
            .metadata
            .into_iter()
            .filter_map(|(key, value)| attributes::attribute_name(&key).map(|name| (name, value)))
            .collect();
        // stable sort: key order survives for everything but the version
        named.sort_by_key(|(name, _)| name != SPEC_VERSION);

        for (name, value) in &named {
            writer.set_attribute(name, value)?;
        }
        if let Some(content_type) = &self.content_type {
            writer.set_attribute(DATA_CONTENT_TYPE, content_type)?;
        }
        writer.set_data(self.payload)
    }
}
