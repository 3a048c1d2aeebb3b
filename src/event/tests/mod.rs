//! Unit tests for the event module.

mod spec_version_tests;
