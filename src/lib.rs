//! Event binding: one logical event, many wire encodings.
//!
//! This crate represents an event (a self-describing envelope with an id,
//! a source, a type and an optional time) as a structured message, a binary
//! message, or an in-memory value, and applies metadata-normalising
//! transformers to it identically whichever shape it arrived in.
//!
//! # Modules
//!
//! - [`event`]: the in-memory event, its attributes and validation
//! - [`binding`]: messages, the encode/decode bridge, transformers and the
//!   pipeline that applies them
//!
//! # Logging
//!
//! The crate emits `tracing` spans and events and never installs a
//! subscriber; applications choose where the output goes.

pub mod binding;
pub mod event;
