//! Concrete implementations of the binding ports.

mod format_registry;
mod json_format;

pub use format_registry::FormatRegistry;
pub use json_format::{JSON_FORMAT, JsonFormat, is_json_content_type};
