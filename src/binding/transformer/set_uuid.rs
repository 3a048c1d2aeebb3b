//! Assigns a fresh UUID to events that have no id.

use super::Transformer;
use crate::{
    binding::{
        error::TransformResult,
        ports::{RandomUuidSource, UuidSource},
    },
    event::domain::Event,
};
use std::sync::Arc;

/// Sets the id to a new UUID when it is empty.
///
/// An existing id is never replaced, whatever its shape; checking id
/// formats belongs elsewhere.
///
/// # Examples
///
/// ```
/// use event_binding::binding::transformer::{SetUuid, Transformer};
/// use event_binding::event::domain::Event;
///
/// let set_uuid = SetUuid::default();
///
/// let filled = set_uuid.transform(Event::new()).expect("random source never fails");
/// assert!(uuid::Uuid::parse_str(filled.id()).is_ok());
///
/// let kept = set_uuid.transform(Event::new().with_id("abc-123")).expect("no-op");
/// assert_eq!(kept.id(), "abc-123");
/// ```
#[derive(Debug)]
pub struct SetUuid<U: UuidSource = RandomUuidSource> {
    source: Arc<U>,
}

impl<U: UuidSource> SetUuid<U> {
    /// Creates the transformer over an injected UUID source.
    #[must_use]
    pub const fn new(source: Arc<U>) -> Self {
        Self { source }
    }
}

impl Default for SetUuid<RandomUuidSource> {
    fn default() -> Self {
        Self::new(Arc::new(RandomUuidSource))
    }
}

impl<U: UuidSource> Clone for SetUuid<U> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<U: UuidSource> Transformer for SetUuid<U> {
    fn name(&self) -> &str {
        "set_uuid"
    }

    fn transform(&self, mut event: Event) -> TransformResult<Event> {
        if event.id().is_empty() {
            let id = self.source.generate()?;
            event.set_id(id.to_string());
        }
        Ok(event)
    }
}
