//! The Event aggregate: context attributes plus an optional payload.

use super::{Data, ExtensionValue, SpecVersion, extension::validate_extension_name};
use crate::event::{error::ValidationError, validation};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// An event: a self-describing occurrence with identity, origin and type.
///
/// Every field is owned, so [`Clone`] yields a deep copy that shares nothing
/// with its source. Transformers receive events by value and hand back the
/// value they produced; an event is never mutated while another holder can
/// observe it.
///
/// # Examples
///
/// ```
/// use event_binding::event::domain::Event;
///
/// let event = Event::new()
///     .with_id("abc-123")
///     .with_source("/sensors/7")
///     .with_type("com.example.reading");
/// assert_eq!(event.id(), "abc-123");
/// assert!(event.time().is_none());
/// assert!(event.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    spec_version: SpecVersion,
    id: String,
    source: String,
    ty: String,
    time: Option<DateTime<Utc>>,
    data_content_type: Option<String>,
    data_schema: Option<String>,
    subject: Option<String>,
    extensions: BTreeMap<String, ExtensionValue>,
    data: Option<Data>,
}

impl Event {
    /// Creates an empty version 1.0 event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the spec version.
    #[must_use]
    pub const fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }

    /// Returns the event id; empty when unset.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the event source; empty when unset.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the event type; empty when unset.
    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Returns the occurrence time, if any.
    #[must_use]
    pub const fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    /// Returns the media type of the payload, if any.
    #[must_use]
    pub fn data_content_type(&self) -> Option<&str> {
        self.data_content_type.as_deref()
    }

    /// Returns the payload schema reference, if any.
    #[must_use]
    pub fn data_schema(&self) -> Option<&str> {
        self.data_schema.as_deref()
    }

    /// Returns the subject, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Returns a single extension value.
    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&ExtensionValue> {
        self.extensions.get(name)
    }

    /// Returns all extensions in name order.
    #[must_use]
    pub const fn extensions(&self) -> &BTreeMap<String, ExtensionValue> {
        &self.extensions
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }

    /// Sets the spec version.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn set_spec_version(&mut self, spec_version: SpecVersion) {
        self.spec_version = spec_version;
    }

    /// Sets the event id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Sets the event source.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Sets the event type.
    pub fn set_type(&mut self, ty: impl Into<String>) {
        self.ty = ty.into();
    }

    /// Sets the occurrence time.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn set_time(&mut self, time: DateTime<Utc>) {
        self.time = Some(time);
    }

    /// Clears the occurrence time.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn clear_time(&mut self) {
        self.time = None;
    }

    /// Sets or clears the payload media type.
    pub fn set_data_content_type(&mut self, content_type: Option<String>) {
        self.data_content_type = content_type;
    }

    /// Sets or clears the payload schema reference.
    pub fn set_data_schema(&mut self, schema: Option<String>) {
        self.data_schema = schema;
    }

    /// Sets or clears the subject.
    pub fn set_subject(&mut self, subject: Option<String>) {
        self.subject = subject;
    }

    /// Sets an extension, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidExtensionName`] if the name breaks
    /// the naming rules, or [`ValidationError::ReservedExtensionName`] if it
    /// names a context attribute.
    pub fn set_extension(
        &mut self,
        name: &str,
        value: impl Into<ExtensionValue>,
    ) -> Result<(), ValidationError> {
        validate_extension_name(name)?;
        if self.spec_version.is_attribute(name) {
            return Err(ValidationError::ReservedExtensionName(name.to_owned()));
        }
        self.extensions.insert(name.to_owned(), value.into());
        Ok(())
    }

    /// Inserts an extension whose name is known to be valid and unreserved.
    ///
    /// Only for names fixed at compile time, such as fixture attributes.
    pub(crate) fn with_known_extension(
        mut self,
        name: &'static str,
        value: impl Into<ExtensionValue>,
    ) -> Self {
        self.extensions.insert(name.to_owned(), value.into());
        self
    }

    /// Removes an extension and returns its previous value.
    pub fn remove_extension(&mut self, name: &str) -> Option<ExtensionValue> {
        self.extensions.remove(name)
    }

    /// Sets or clears the payload.
    pub fn set_data(&mut self, data: Option<Data>) {
        self.data = data;
    }

    /// Removes the payload and returns it.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Option::take is not const in stable Rust"
    )]
    pub fn take_data(&mut self) -> Option<Data> {
        self.data.take()
    }

    /// Sets the spec version.
    #[must_use]
    pub const fn with_spec_version(mut self, spec_version: SpecVersion) -> Self {
        self.spec_version = spec_version;
        self
    }

    /// Sets the event id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Sets the event source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.set_source(source);
        self
    }

    /// Sets the event type.
    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.set_type(ty);
        self
    }

    /// Sets the occurrence time.
    #[must_use]
    pub const fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the payload media type.
    #[must_use]
    pub fn with_data_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.data_content_type = Some(content_type.into());
        self
    }

    /// Sets the payload schema reference.
    #[must_use]
    pub fn with_data_schema(mut self, schema: impl Into<String>) -> Self {
        self.data_schema = Some(schema.into());
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets an extension.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Event::set_extension`].
    pub fn with_extension(
        mut self,
        name: &str,
        value: impl Into<ExtensionValue>,
    ) -> Result<Self, ValidationError> {
        self.set_extension(name, value)?;
        Ok(self)
    }

    /// Sets the payload.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Data>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Checks the required attributes and extension names.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`]; several failures are combined into
    /// [`ValidationError::Multiple`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_event(self)
    }
}
