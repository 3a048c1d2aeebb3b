//! Transformers: functions that normalise or mutate an event.
//!
//! A [`Transformer`] takes an event by value and returns the event it
//! produced. Ownership makes the functional-update contract structural: a
//! transformer can only touch the event it was handed, and nothing else
//! can observe that event until the transformer returns it.
//!
//! [`Transformers`] is an ordered list applied as a left fold; later
//! transformers see the output of earlier ones.

mod add_time_now;
mod extension;
mod set_uuid;

pub use add_time_now::AddTimeNow;
pub use extension::{DeleteExtension, SetExtension};
pub use set_uuid::SetUuid;

use super::error::TransformResult;
use crate::event::domain::Event;
use std::{fmt, sync::Arc};
use tracing::warn;

/// A function from event to event that may fail.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Hold no mutable state, so one instance can serve many concurrent
///   pipeline runs without locking
/// - Be cheap and non-blocking; the pipeline has no timeout around a call
/// - Fail with [`crate::binding::error::TransformError`] rather than
///   return a partially updated event
pub trait Transformer: Send + Sync {
    /// Returns a short name used in logs and errors.
    fn name(&self) -> &str;

    /// Transforms an event.
    ///
    /// # Errors
    ///
    /// Returns [`crate::binding::error::TransformError`] when the
    /// transformation cannot be made.
    fn transform(&self, event: Event) -> TransformResult<Event>;
}

/// An ordered list of transformers.
///
/// Cloning is cheap: the transformers themselves are shared.
///
/// # Examples
///
/// ```
/// use event_binding::binding::transformer::{AddTimeNow, SetUuid, Transformers};
/// use event_binding::event::domain::Event;
///
/// let transformers = Transformers::new()
///     .with(SetUuid::default())
///     .with(AddTimeNow::default());
///
/// let event = transformers.apply(Event::new()).expect("default sources never fail");
/// assert!(!event.id().is_empty());
/// assert!(event.time().is_some());
/// ```
#[derive(Clone, Default)]
pub struct Transformers(Vec<Arc<dyn Transformer>>);

impl Transformers {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a transformer.
    #[must_use]
    pub fn with(mut self, transformer: impl Transformer + 'static) -> Self {
        self.push(Arc::new(transformer));
        self
    }

    /// Appends a shared transformer.
    pub fn push(&mut self, transformer: Arc<dyn Transformer>) {
        self.0.push(transformer);
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of transformers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the transformer names in application order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|transformer| transformer.name()).collect()
    }

    /// Folds the event through every transformer in order.
    ///
    /// The first failure ends the fold. The events produced before it are
    /// dropped; only the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the failing transformer's error.
    pub fn apply(&self, event: Event) -> TransformResult<Event> {
        self.0.iter().try_fold(event, |current, transformer| {
            transformer.transform(current).inspect_err(|err| {
                warn!(transformer = transformer.name(), error = %err, "transformer failed");
            })
        })
    }
}

impl fmt::Debug for Transformers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl From<Vec<Arc<dyn Transformer>>> for Transformers {
    fn from(transformers: Vec<Arc<dyn Transformer>>) -> Self {
        Self(transformers)
    }
}

impl FromIterator<Arc<dyn Transformer>> for Transformers {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Transformer>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A transformer built from a closure.
///
/// # Examples
///
/// ```
/// use event_binding::binding::transformer::{FnTransformer, Transformer};
/// use event_binding::event::domain::Event;
///
/// let upper = FnTransformer::new("upper_type", |event: Event| {
///     let ty = event.ty().to_uppercase();
///     Ok(event.with_type(ty))
/// });
/// let event = upper.transform(Event::new().with_type("a.b")).expect("infallible");
/// assert_eq!(event.ty(), "A.B");
/// ```
pub struct FnTransformer<F> {
    name: String,
    function: F,
}

impl<F> FnTransformer<F>
where
    F: Fn(Event) -> TransformResult<Event> + Send + Sync,
{
    /// Wraps a closure under the given name.
    #[must_use]
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }
}

impl<F> Transformer for FnTransformer<F>
where
    F: Fn(Event) -> TransformResult<Event> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, event: Event) -> TransformResult<Event> {
        (self.function)(event)
    }
}

impl<F> fmt::Debug for FnTransformer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransformer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
