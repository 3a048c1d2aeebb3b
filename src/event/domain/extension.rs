//! Extension attribute values and naming rules.

use crate::event::error::ValidationError;
use std::fmt;

/// Maximum length of an extension name.
pub const MAX_EXTENSION_NAME_LEN: usize = 20;

/// Value of an extension attribute.
///
/// Structured encodings keep the type; binary encodings carry every value
/// as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtensionValue {
    /// A string value.
    String(String),
    /// A boolean value.
    Boolean(bool),
    /// A signed integer value.
    Integer(i64),
}

impl ExtensionValue {
    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Boolean(_) | Self::Integer(_) => None,
        }
    }
}

impl fmt::Display for ExtensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for ExtensionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ExtensionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<bool> for ExtensionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ExtensionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ExtensionValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Checks that `name` is a legal extension name.
///
/// Names are one to [`MAX_EXTENSION_NAME_LEN`] characters drawn from
/// lower-case ASCII letters and digits.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidExtensionName`] when the name is empty,
/// too long, or contains other characters.
pub fn validate_extension_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::invalid_extension_name(
            name,
            "name must not be empty",
        ));
    }
    if name.len() > MAX_EXTENSION_NAME_LEN {
        return Err(ValidationError::invalid_extension_name(
            name,
            format!("name exceeds {MAX_EXTENSION_NAME_LEN} characters"),
        ));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return Err(ValidationError::invalid_extension_name(
            name,
            "only lower-case letters and digits are allowed",
        ));
    }
    Ok(())
}
