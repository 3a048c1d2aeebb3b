//! Domain types for events.
//!
//! Pure value types with no encoding concerns.

mod data;
mod event;
mod extension;
mod spec_version;

pub use data::Data;
pub use event::Event;
pub use extension::{ExtensionValue, MAX_EXTENSION_NAME_LEN, validate_extension_name};
pub use spec_version::SpecVersion;
