//! Error types for event construction and validation.
//!
//! Uses `thiserror` for typed variants that callers can match on.

use thiserror::Error;

/// Errors raised when an event fails its required-attribute checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The `id` attribute is empty.
    #[error("event id is required")]
    MissingId,

    /// The `source` attribute is empty.
    #[error("event source is required")]
    MissingSource,

    /// The `type` attribute is empty.
    #[error("event type is required")]
    MissingType,

    /// The `datacontenttype` attribute is set but empty.
    #[error("datacontenttype must not be empty when present")]
    EmptyDataContentType,

    /// An extension name does not follow the naming rules.
    #[error("invalid extension name '{name}': {reason}")]
    InvalidExtensionName {
        /// The offending extension name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// An extension name collides with a context attribute.
    #[error("extension name '{0}' is reserved for a context attribute")]
    ReservedExtensionName(String),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates an error for an extension name that breaks the naming rules.
    #[must_use]
    pub fn invalid_extension_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExtensionName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Combines multiple validation errors into a single error.
    ///
    /// A single error is returned as-is rather than wrapped. Nested
    /// `Multiple` values are flattened.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flat = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Self::Multiple(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }

        if flat.len() > 1 {
            return Self::Multiple(flat);
        }
        flat.into_iter().next().unwrap_or_else(|| {
            debug_assert!(false, "multiple() called with empty errors vector");
            Self::Multiple(Vec::new())
        })
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Error returned when parsing an unknown spec version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported spec version: {0}")]
pub struct ParseSpecVersionError(pub String);
