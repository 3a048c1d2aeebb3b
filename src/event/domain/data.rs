//! Event payload representation.

use serde_json::Value;

/// Payload carried by an event.
///
/// The variant records how the payload was produced so that a structured
/// encoder can emit it in its natural form: JSON values inline, text as a
/// string, and opaque bytes base64-encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// Opaque bytes.
    Binary(Vec<u8>),
    /// UTF-8 text.
    Text(String),
    /// A JSON value.
    Json(Value),
}

impl Data {
    /// Returns the payload as bytes, as it would travel in binary mode.
    ///
    /// JSON values are serialised compactly.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Binary(bytes) => bytes.clone(),
            Self::Text(text) => text.as_bytes().to_vec(),
            Self::Json(value) => value.to_string().into_bytes(),
        }
    }

    /// Consumes the payload and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Binary(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
            Self::Json(value) => value.to_string().into_bytes(),
        }
    }

    /// Returns `true` if the payload has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Binary(bytes) => bytes.is_empty(),
            Self::Text(text) => text.is_empty(),
            Self::Json(_) => false,
        }
    }
}

impl From<Vec<u8>> for Data {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Value> for Data {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}
