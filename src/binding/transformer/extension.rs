//! Transformers that add, replace or remove extension attributes.

use super::Transformer;
use crate::{
    binding::error::{TransformError, TransformResult},
    event::domain::{Event, ExtensionValue},
};

/// Sets one extension, replacing any existing value.
///
/// # Examples
///
/// ```
/// use event_binding::binding::transformer::{SetExtension, Transformer};
/// use event_binding::event::domain::{Event, ExtensionValue};
///
/// let tag = SetExtension::new("tenant", "acme");
/// let event = tag.transform(Event::new()).expect("valid name");
/// assert_eq!(event.extension("tenant"), Some(&ExtensionValue::from("acme")));
/// ```
#[derive(Debug, Clone)]
pub struct SetExtension {
    name: String,
    value: ExtensionValue,
}

impl SetExtension {
    /// Creates the transformer.
    ///
    /// The name is checked when the transformer runs, against the spec
    /// version of the event it is given.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<ExtensionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Transformer for SetExtension {
    fn name(&self) -> &str {
        "set_extension"
    }

    fn transform(&self, mut event: Event) -> TransformResult<Event> {
        event
            .set_extension(&self.name, self.value.clone())
            .map_err(|err| TransformError::new(Transformer::name(self), err.to_string()))?;
        Ok(event)
    }
}

/// Removes one extension; events without it pass through unchanged.
#[derive(Debug, Clone)]
pub struct DeleteExtension {
    name: String,
}

impl DeleteExtension {
    /// Creates the transformer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Transformer for DeleteExtension {
    fn name(&self) -> &str {
        "delete_extension"
    }

    fn transform(&self, mut event: Event) -> TransformResult<Event> {
        event.remove_extension(&self.name);
        Ok(event)
    }
}
