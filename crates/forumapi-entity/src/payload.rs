//! Presence and type checks for JSON request payloads.

use serde_json::Value;

use forumapi_core::error::AppError;
use forumapi_core::result::AppResult;

/// Messages reported when a payload has the wrong shape.
#[derive(Debug, Clone, Copy)]
pub struct ShapeMessages {
    /// Reported when a property is absent or `null`.
    pub missing: &'static str,
    /// Reported when a property is present but not a string.
    pub wrong_type: &'static str,
}

/// Extracts the named string properties from a JSON object.
///
/// Presence is checked for every field before any type is checked, so a
/// payload that is both incomplete and mistyped reports the missing
/// property.
pub fn string_fields<const N: usize>(
    value: &Value,
    fields: [&str; N],
    messages: ShapeMessages,
) -> AppResult<[String; N]> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::validation(messages.missing))?;

    if fields
        .iter()
        .any(|field| object.get(*field).is_none_or(Value::is_null))
    {
        return Err(AppError::validation(messages.missing));
    }

    if fields
        .iter()
        .any(|field| !object.get(*field).is_some_and(Value::is_string))
    {
        return Err(AppError::validation(messages.wrong_type));
    }

    Ok(fields.map(|field| {
        object
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }))
}
