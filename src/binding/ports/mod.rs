//! Port trait definitions for the binding layer.
//!
//! Ports name the collaborators the bridge and the transformers depend on:
//! structured format codecs and UUID generation. The clock port is
//! [`mockable::Clock`].

pub mod format;
pub mod uuid_source;

pub use format::EventFormat;
pub use uuid_source::{RandomUuidSource, UuidSource};
