//! Binary-mode naming convention for transport metadata keys.
//!
//! Every context attribute and extension except `datacontenttype` travels
//! as a metadata entry named `ce-<attribute>`. The content type travels in
//! the transport's own content-type slot.
//!
//! Values use their canonical string forms; [`format_time`] and
//! [`parse_time`] give the one used for `time` by every encoding.

use crate::binding::error::{DecodeError, DecodeResult};
use chrono::{DateTime, SecondsFormat, Utc};

/// Prefix applied to attribute names in binary mode.
pub const ATTRIBUTE_PREFIX: &str = "ce-";

/// Name of the spec version attribute.
pub const SPEC_VERSION: &str = "specversion";
/// Name of the id attribute.
pub const ID: &str = "id";
/// Name of the source attribute.
pub const SOURCE: &str = "source";
/// Name of the type attribute.
pub const TYPE: &str = "type";
/// Name of the time attribute.
pub const TIME: &str = "time";
/// Name of the content type attribute.
pub const DATA_CONTENT_TYPE: &str = "datacontenttype";
/// Name of the 0.3 content encoding attribute.
pub const DATA_CONTENT_ENCODING: &str = "datacontentencoding";
/// Name of the subject attribute.
pub const SUBJECT: &str = "subject";

/// Returns the metadata key carrying `attribute` in binary mode.
///
/// # Examples
///
/// ```
/// use event_binding::binding::attributes::metadata_key;
///
/// assert_eq!(metadata_key("id"), "ce-id");
/// ```
#[must_use]
pub fn metadata_key(attribute: &str) -> String {
    format!("{ATTRIBUTE_PREFIX}{attribute}")
}

/// Returns the attribute carried by a metadata key, if the key is one.
///
/// Matching is case-insensitive; the returned name is lower-case.
///
/// # Examples
///
/// ```
/// use event_binding::binding::attributes::attribute_name;
///
/// assert_eq!(attribute_name("CE-Source").as_deref(), Some("source"));
/// assert_eq!(attribute_name("content-length"), None);
/// ```
#[must_use]
pub fn attribute_name(key: &str) -> Option<String> {
    let lower = key.to_ascii_lowercase();
    lower
        .strip_prefix(ATTRIBUTE_PREFIX)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

/// Formats a timestamp as RFC 3339 in UTC with a `Z` suffix.
///
/// Sub-second digits are emitted only as far as needed, so parsing the
/// output with [`parse_time`] and formatting again yields the same string.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use event_binding::binding::attributes::format_time;
///
/// let time = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).single().expect("valid date");
/// assert_eq!(format_time(time), "2024-05-01T12:30:00Z");
/// ```
#[must_use]
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses an RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidAttribute`] naming the `time` attribute.
pub fn parse_time(value: &str) -> DecodeResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|err| DecodeError::invalid_attribute(TIME, err.to_string()))
}
