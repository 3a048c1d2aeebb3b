//! The in-memory event representation.
//!
//! An [`domain::Event`] carries the context attributes (`id`, `source`,
//! `type`, `time`, ...), extensions and an optional payload. It knows
//! nothing about wire encodings; see [`crate::binding`] for those.
//!
//! # Example
//!
//! ```
//! use event_binding::event::{domain::Event, error::ValidationError};
//!
//! let event = Event::new().with_source("/jobs").with_type("job.done");
//! assert_eq!(event.validate(), Err(ValidationError::MissingId));
//! ```

pub mod domain;
pub mod error;
pub mod validation;

#[cfg(test)]
mod tests;
