//! Error types for message reads, format codecs and transformers.
//!
//! Uses `thiserror` for typed variants. [`BindingError`] is the single error
//! surfaced by the conversion bridge and the pipeline; the narrower types
//! convert into it with `?`.

use super::Encoding;
use crate::event::error::{ParseSpecVersionError, ValidationError};
use thiserror::Error;

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;

/// Result type for format decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for transformer calls.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors surfaced by message reads, conversion and the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    /// A read was attempted on the wrong message variant.
    #[error("encoding mismatch: expected {expected} message, found {actual}")]
    EncodingMismatch {
        /// The encoding the read operation requires.
        expected: Encoding,
        /// The encoding the message actually has.
        actual: Encoding,
    },

    /// The message content does not conform to its declared format.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An event could not be written in the requested format.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The resulting event failed its required-attribute checks.
    #[error("event validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A transformer failed; the fold was aborted.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl BindingError {
    /// Creates an encoding mismatch error.
    #[must_use]
    pub const fn mismatch(expected: Encoding, actual: Encoding) -> Self {
        Self::EncodingMismatch { expected, actual }
    }
}

/// Errors raised while decoding a message into an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No codec is registered for the structured format tag.
    #[error("unknown event format: {0}")]
    UnknownFormat(String),

    /// The payload is not valid for its format.
    #[error("malformed {format} payload: {reason}")]
    Malformed {
        /// The declared format.
        format: String,
        /// Description of the failure.
        reason: String,
    },

    /// A required attribute is absent.
    #[error("missing required attribute '{0}'")]
    MissingAttribute(&'static str),

    /// An attribute value could not be interpreted.
    #[error("invalid value for attribute '{name}': {reason}")]
    InvalidAttribute {
        /// The attribute name.
        name: String,
        /// Description of the failure.
        reason: String,
    },

    /// The spec version is not supported.
    #[error(transparent)]
    SpecVersion(#[from] ParseSpecVersionError),
}

impl DecodeError {
    /// Creates a malformed payload error.
    #[must_use]
    pub fn malformed(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid attribute error.
    #[must_use]
    pub fn invalid_attribute(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while encoding an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// No codec is registered for the requested format.
    #[error("unknown event format: {0}")]
    UnknownFormat(String),

    /// The codec failed to serialise the event.
    #[error("failed to encode event as {format}: {reason}")]
    Serialization {
        /// The requested format.
        format: String,
        /// Description of the failure.
        reason: String,
    },
}

impl EncodeError {
    /// Creates a serialisation error.
    #[must_use]
    pub fn serialization(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            reason: reason.into(),
        }
    }
}

/// A transformer's own failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transformer '{transformer}' failed: {reason}")]
pub struct TransformError {
    transformer: String,
    reason: String,
}

impl TransformError {
    /// Creates an error attributed to the named transformer.
    #[must_use]
    pub fn new(transformer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            transformer: transformer.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the transformer that failed.
    #[must_use]
    pub fn transformer(&self) -> &str {
        &self.transformer
    }

    /// Returns the failure description.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
