//! Unit tests for the binding module.
//!
//! Tests are organised by component: messages, the JSON format, the
//! conversion bridge, transformers, the pipeline and the harness.

mod harness_tests;
mod support;
