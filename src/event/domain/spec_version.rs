//! Supported event specification versions and their attribute names.

use crate::event::error::ParseSpecVersionError;
use std::fmt;

/// Version of the event envelope specification an event conforms to.
///
/// The version decides the wire names of a few optional attributes; the
/// required attributes are named identically in every version.
///
/// # Examples
///
/// ```
/// use event_binding::event::domain::SpecVersion;
///
/// let version = SpecVersion::try_from("1.0").expect("known version");
/// assert_eq!(version, SpecVersion::V10);
/// assert_eq!(version.data_schema_attribute(), "dataschema");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    /// Version 0.3.
    V03,
    /// Version 1.0.
    #[default]
    V10,
}

impl SpecVersion {
    /// Returns the wire representation of the version.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V03 => "0.3",
            Self::V10 => "1.0",
        }
    }

    /// Returns the name of the schema attribute in this version.
    #[must_use]
    pub const fn data_schema_attribute(self) -> &'static str {
        match self {
            Self::V03 => "schemaurl",
            Self::V10 => "dataschema",
        }
    }

    /// Returns every context attribute name defined by this version.
    ///
    /// Extension names must not collide with these.
    #[must_use]
    pub const fn attribute_names(self) -> &'static [&'static str] {
        match self {
            Self::V03 => &[
                "specversion",
                "id",
                "source",
                "type",
                "time",
                "datacontenttype",
                "datacontentencoding",
                "schemaurl",
                "subject",
            ],
            Self::V10 => &[
                "specversion",
                "id",
                "source",
                "type",
                "time",
                "datacontenttype",
                "dataschema",
                "subject",
            ],
        }
    }

    /// Returns `true` if `name` is a context attribute in this version.
    #[must_use]
    pub fn is_attribute(self, name: &str) -> bool {
        self.attribute_names().contains(&name)
    }
}

impl TryFrom<&str> for SpecVersion {
    type Error = ParseSpecVersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "0.3" => Ok(Self::V03),
            "1.0" => Ok(Self::V10),
            _ => Err(ParseSpecVersionError(value.to_owned())),
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
