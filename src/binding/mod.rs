//! Moving events between wire encodings, and transforming them on the way.
//!
//! # Architecture
//!
//! - **Messages**: [`message::Message`] is closed over three variants:
//!   structured, binary and event-backed. Reads consume the message.
//! - **Ports**: [`ports::EventFormat`] (structured codecs) and
//!   [`ports::UuidSource`]; the clock port is [`mockable::Clock`].
//! - **Adapters**: [`adapters::JsonFormat`] and [`adapters::FormatRegistry`].
//! - **Bridge**: [`convert`] decodes any message into an
//!   [`crate::event::domain::Event`] and encodes events into any variant.
//! - **Transformers**: [`transformer::Transformer`] and the ordered
//!   [`transformer::Transformers`] list.
//! - **Pipeline**: [`pipeline::Pipeline`] applies a list to a message,
//!   decoding only when there is something to apply.
//! - **Harness**: [`harness`] runs one scenario across every encoding.
//!
//! # Example
//!
//! ```
//! use event_binding::binding::{
//!     harness, message::Message, pipeline::Pipeline, transformer::Transformers,
//! };
//!
//! let message = harness::structured_message(&harness::min_event()).expect("encodable");
//! let original = message.clone();
//!
//! let output = Pipeline::default()
//!     .apply(message, &Transformers::new())
//!     .expect("passthrough");
//! assert_eq!(output, original);
//! ```

pub mod adapters;
pub mod attributes;
pub mod config;
pub mod convert;
mod encoding;
pub mod error;
pub mod harness;
pub mod message;
pub mod pipeline;
pub mod ports;
pub mod transformer;

pub use encoding::Encoding;

#[cfg(test)]
mod tests;
