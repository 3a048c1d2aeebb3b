//! Pipeline configuration.

use super::adapters::JSON_FORMAT;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::binding::pipeline::Pipeline`].
///
/// # Examples
///
/// ```
/// use event_binding::binding::config::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert!(config.validate_output);
/// assert_eq!(config.structured_format, "application/cloudevents+json");
///
/// let lenient = PipelineConfig::lenient();
/// assert!(!lenient.validate_output);
/// ```
///
/// Missing fields fall back to their defaults when deserialised:
///
/// ```
/// use event_binding::binding::config::PipelineConfig;
///
/// let config: PipelineConfig =
///     serde_json::from_str(r#"{"validate_output": false}"#).expect("valid config");
/// assert_eq!(config, PipelineConfig::lenient());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Whether transformed events must pass required-attribute checks.
    pub validate_output: bool,
    /// Format used when a structured message must be produced from a
    /// message that had no format of its own.
    pub structured_format: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            validate_output: true,
            structured_format: JSON_FORMAT.to_owned(),
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration that skips output validation.
    ///
    /// Useful when events are normalised in stages and only the last stage
    /// is expected to produce a complete event.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            validate_output: false,
            ..Default::default()
        }
    }

    /// Sets the structured format.
    #[must_use]
    pub fn with_structured_format(mut self, format: impl Into<String>) -> Self {
        self.structured_format = format.into();
        self
    }
}
