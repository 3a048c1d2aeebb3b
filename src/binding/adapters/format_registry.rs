//! Registry of structured formats keyed by media type.

use super::JsonFormat;
use crate::binding::ports::EventFormat;
use std::{collections::HashMap, fmt, sync::Arc};

/// Lookup table from media type to format codec.
///
/// Media types are matched case-insensitively and without parameters, so
/// `application/cloudevents+json; charset=utf-8` finds the JSON format.
///
/// # Examples
///
/// ```
/// use event_binding::binding::adapters::FormatRegistry;
///
/// let registry = FormatRegistry::new();
/// assert!(registry.lookup("Application/CloudEvents+JSON; charset=utf-8").is_some());
/// assert!(registry.lookup("application/cloudevents+avro").is_none());
/// ```
#[derive(Clone, Default)]
pub struct FormatRegistry {
    formats: HashMap<String, Arc<dyn EventFormat>>,
}

impl FormatRegistry {
    /// Creates a registry holding the JSON format.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Arc::new(JsonFormat));
        registry
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers a format under its media type.
    ///
    /// If a format is already registered for the media type, it is replaced.
    pub fn register(&mut self, format: Arc<dyn EventFormat>) {
        let key = normalize_media_type(format.media_type());
        self.formats.insert(key, format);
    }

    /// Returns the format registered for a media type.
    #[must_use]
    pub fn lookup(&self, media_type: &str) -> Option<&dyn EventFormat> {
        self.formats
            .get(&normalize_media_type(media_type))
            .map(|format| &**format)
    }

    /// Returns `true` if a format is registered for the media type.
    #[must_use]
    pub fn contains(&self, media_type: &str) -> bool {
        self.formats.contains_key(&normalize_media_type(media_type))
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut media_types: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        media_types.sort_unstable();
        f.debug_struct("FormatRegistry")
            .field("formats", &media_types)
            .finish()
    }
}

fn normalize_media_type(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
