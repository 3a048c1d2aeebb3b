//! JSON structured format (`application/cloudevents+json`).
//!
//! Members are written in a fixed order (context attributes, then
//! extensions by name, then the payload) so that an unchanged event always
//! serialises to the same bytes.

use crate::{
    binding::{
        attributes::{
            DATA_CONTENT_ENCODING, DATA_CONTENT_TYPE, ID, SOURCE, SPEC_VERSION, SUBJECT, TIME,
            TYPE, format_time, parse_time,
        },
        error::{DecodeError, DecodeResult, EncodeError},
        ports::EventFormat,
    },
    event::domain::{Data, Event, ExtensionValue, SpecVersion},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

/// Media type of the JSON structured format.
pub const JSON_FORMAT: &str = "application/cloudevents+json";

const DATA: &str = "data";
const DATA_BASE64: &str = "data_base64";
const BASE64_ENCODING: &str = "base64";

/// The JSON structured event format.
///
/// # Examples
///
/// ```
/// use event_binding::binding::{adapters::JsonFormat, ports::EventFormat};
/// use event_binding::event::domain::Event;
///
/// let event = Event::new().with_id("1").with_source("/s").with_type("t");
/// let bytes = JsonFormat.encode(&event).expect("encodable");
/// assert_eq!(
///     bytes,
///     br#"{"specversion":"1.0","id":"1","source":"/s","type":"t"}"#.to_vec()
/// );
/// assert_eq!(JsonFormat.decode(&bytes).expect("decodable"), event);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl EventFormat for JsonFormat {
    fn media_type(&self) -> &str {
        JSON_FORMAT
    }

    fn encode(&self, event: &Event) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(&Envelope(event))
            .map_err(|err| EncodeError::serialization(JSON_FORMAT, err.to_string()))
    }

    fn decode(&self, payload: &[u8]) -> DecodeResult<Event> {
        let object: Map<String, Value> = serde_json::from_slice(payload)
            .map_err(|err| DecodeError::malformed(JSON_FORMAT, err.to_string()))?;
        decode_object(object)
    }
}

/// Returns `true` for media types whose payload is JSON.
///
/// Matches `application/json`, `text/json` and any `+json` suffix;
/// parameters are ignored.
#[must_use]
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence == "text/json" || essence.ends_with("+json")
}

struct Envelope<'a>(&'a Event);

impl Serialize for Envelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let event = self.0;
        let version = event.spec_version();
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry(SPEC_VERSION, version.as_str())?;
        map.serialize_entry(ID, event.id())?;
        map.serialize_entry(SOURCE, event.source())?;
        map.serialize_entry(TYPE, event.ty())?;
        if let Some(time) = event.time() {
            map.serialize_entry(TIME, &format_time(time))?;
        }
        if let Some(content_type) = event.data_content_type() {
            map.serialize_entry(DATA_CONTENT_TYPE, content_type)?;
        }
        if let Some(schema) = event.data_schema() {
            map.serialize_entry(version.data_schema_attribute(), schema)?;
        }
        if let Some(subject) = event.subject() {
            map.serialize_entry(SUBJECT, subject)?;
        }

        for (name, value) in event.extensions() {
            match value {
                ExtensionValue::String(text) => map.serialize_entry(name, text)?,
                ExtensionValue::Boolean(flag) => map.serialize_entry(name, flag)?,
                ExtensionValue::Integer(number) => map.serialize_entry(name, number)?,
            }
        }

        match event.data() {
            Some(Data::Json(value)) => map.serialize_entry(DATA, value)?,
            Some(Data::Text(text)) => map.serialize_entry(DATA, text)?,
            Some(Data::Binary(bytes)) => {
                let encoded = BASE64.encode(bytes);
                match version {
                    SpecVersion::V10 => map.serialize_entry(DATA_BASE64, &encoded)?,
                    SpecVersion::V03 => {
                        map.serialize_entry(DATA_CONTENT_ENCODING, BASE64_ENCODING)?;
                        map.serialize_entry(DATA, &encoded)?;
                    }
                }
            }
            None => {}
        }

        map.end()
    }
}

fn decode_object(mut object: Map<String, Value>) -> DecodeResult<Event> {
    let version_text =
        take_string(&mut object, SPEC_VERSION)?.ok_or(DecodeError::MissingAttribute(SPEC_VERSION))?;
    let version = SpecVersion::try_from(version_text.as_str())?;

    let mut event = Event::new().with_spec_version(version);
    if let Some(id) = take_string(&mut object, ID)? {
        event.set_id(id);
    }
    if let Some(source) = take_string(&mut object, SOURCE)? {
        event.set_source(source);
    }
    if let Some(ty) = take_string(&mut object, TYPE)? {
        event.set_type(ty);
    }
    if let Some(time) = take_string(&mut object, TIME)? {
        event.set_time(parse_time(&time)?);
    }
    event.set_data_content_type(take_string(&mut object, DATA_CONTENT_TYPE)?);
    event.set_data_schema(take_string(&mut object, version.data_schema_attribute())?);
    event.set_subject(take_string(&mut object, SUBJECT)?);

    let data = take_data(&mut object, version, event.data_content_type())?;
    event.set_data(data);

    for (name, value) in object {
        let extension = match value {
            Value::Null => continue,
            Value::String(text) => ExtensionValue::String(text),
            Value::Bool(flag) => ExtensionValue::Boolean(flag),
            Value::Number(number) => number.as_i64().map(ExtensionValue::Integer).ok_or_else(
                || DecodeError::invalid_attribute(&name, "extension numbers must be integers"),
            )?,
            Value::Array(_) | Value::Object(_) => {
                return Err(DecodeError::invalid_attribute(
                    &name,
                    "extension values must be strings, booleans or integers",
                ));
            }
        };
        event
            .set_extension(&name, extension)
            .map_err(|err| DecodeError::invalid_attribute(&name, err.to_string()))?;
    }

    Ok(event)
}

fn take_string(object: &mut Map<String, Value>, name: &str) -> DecodeResult<Option<String>> {
    match object.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(DecodeError::invalid_attribute(name, "expected a string")),
    }
}

fn take_data(
    object: &mut Map<String, Value>,
    version: SpecVersion,
    content_type: Option<&str>,
) -> DecodeResult<Option<Data>> {
    let base64_text = match version {
        SpecVersion::V10 => take_string(object, DATA_BASE64)?,
        SpecVersion::V03 => match take_string(object, DATA_CONTENT_ENCODING)?.as_deref() {
            None => None,
            Some(BASE64_ENCODING) => Some(
                take_string(object, DATA)?
                    .ok_or_else(|| DecodeError::invalid_attribute(DATA, "base64 data is missing"))?,
            ),
            Some(other) => {
                return Err(DecodeError::invalid_attribute(
                    DATA_CONTENT_ENCODING,
                    format!("unsupported encoding '{other}'"),
                ));
            }
        },
    };

    if let Some(text) = base64_text {
        let bytes = BASE64
            .decode(text.as_bytes())
            .map_err(|err| DecodeError::invalid_attribute(DATA, err.to_string()))?;
        return Ok(Some(Data::Binary(bytes)));
    }

    let is_json = content_type.is_some_and(is_json_content_type);
    Ok(match object.remove(DATA) {
        None => None,
        Some(Value::String(text)) if !is_json => Some(Data::Text(text)),
        Some(value) => Some(Data::Json(value)),
    })
}
