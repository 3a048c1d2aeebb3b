//! Stamps events that have no time with the current UTC time.

use super::Transformer;
use crate::{binding::error::TransformResult, event::domain::Event};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// Sets the time to `clock.utc()` when the event has none.
///
/// Any existing time is kept as-is, including ones far in the future or
/// the past.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use event_binding::binding::transformer::{AddTimeNow, Transformer};
/// use event_binding::event::domain::Event;
///
/// let before = Utc::now();
/// let event = AddTimeNow::default().transform(Event::new()).expect("infallible");
/// assert!(event.time().is_some_and(|time| time >= before));
/// ```
#[derive(Debug)]
pub struct AddTimeNow<C: Clock + Send + Sync = DefaultClock> {
    clock: Arc<C>,
}

impl<C: Clock + Send + Sync> AddTimeNow<C> {
    /// Creates the transformer over an injected clock.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }
}

impl Default for AddTimeNow<DefaultClock> {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl<C: Clock + Send + Sync> Clone for AddTimeNow<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock + Send + Sync> Transformer for AddTimeNow<C> {
    fn name(&self) -> &str {
        "add_time_now"
    }

    fn transform(&self, mut event: Event) -> TransformResult<Event> {
        if event.time().is_none() {
            event.set_time(self.clock.utc());
        }
        Ok(event)
    }
}
