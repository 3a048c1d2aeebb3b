//! Step definitions for event normalisation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
