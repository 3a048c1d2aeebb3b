//! Required-attribute rules for events.
//!
//! Each rule checks one concern; [`validate_event`] runs them all and
//! collects every failure rather than stopping at the first.

use super::{
    domain::{Event, validate_extension_name},
    error::ValidationError,
};

/// Result type for validation rules.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an event against all rules.
///
/// # Errors
///
/// Returns the single failure, or [`ValidationError::Multiple`] when more
/// than one rule fails.
pub fn validate_event(event: &Event) -> ValidationResult<()> {
    let errors: Vec<ValidationError> = [
        validate_id(event),
        validate_source(event),
        validate_type(event),
        validate_data_content_type(event),
        validate_extensions(event),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::multiple(errors))
    }
}

/// Checks that the id is non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::MissingId`].
pub fn validate_id(event: &Event) -> ValidationResult<()> {
    if event.id().is_empty() {
        return Err(ValidationError::MissingId);
    }
    Ok(())
}

/// Checks that the source is non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::MissingSource`].
pub fn validate_source(event: &Event) -> ValidationResult<()> {
    if event.source().is_empty() {
        return Err(ValidationError::MissingSource);
    }
    Ok(())
}

/// Checks that the type is non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::MissingType`].
pub fn validate_type(event: &Event) -> ValidationResult<()> {
    if event.ty().is_empty() {
        return Err(ValidationError::MissingType);
    }
    Ok(())
}

/// Checks that a present content type is not blank.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyDataContentType`].
pub fn validate_data_content_type(event: &Event) -> ValidationResult<()> {
    match event.data_content_type() {
        Some(content_type) if content_type.trim().is_empty() => {
            Err(ValidationError::EmptyDataContentType)
        }
        _ => Ok(()),
    }
}

/// Checks every extension name.
///
/// Extensions normally pass through [`Event::set_extension`], which already
/// enforces the rules; this catches names that reached the event another
/// way, such as a version change that made a name reserved.
///
/// # Errors
///
/// Returns the extension naming failures, combined when there are several.
pub fn validate_extensions(event: &Event) -> ValidationResult<()> {
    let version = event.spec_version();
    let errors: Vec<ValidationError> = event
        .extensions()
        .keys()
        .filter_map(|name| {
            if version.is_attribute(name) {
                return Some(ValidationError::ReservedExtensionName(name.clone()));
            }
            validate_extension_name(name).err()
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::multiple(errors))
    }
}
