//! Turn a decoded API response into the text handed back to the page.

use crate::Result;
use crate::json::get_by_path;

use serde_json::Value;
use std::collections::BTreeMap;

/// Output options, usually taken from the call's optional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultOptions {
    pub pretty: bool,
    pub json_key: Option<String>,
}

impl ResultOptions {
    /// Reads `pretty` (case-insensitive "true") and `json_key`.
    pub fn from_optional(optional: &BTreeMap<String, String>) -> Self {
        Self {
            pretty: optional
                .get("pretty")
                .is_some_and(|v| v.eq_ignore_ascii_case("true")),
            json_key: optional.get("json_key").cloned(),
        }
    }
}

/// Objects and arrays are JSON-encoded; scalars are emitted as plain text.
pub fn should_encode_as_json(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Plain text form of a value: strings unquoted, `null` as "null".
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn encode(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Encode `value` for output. With `json_key` set on an object, only the
/// value at that path is returned, and scalars come back as plain text.
pub fn create_result(value: &Value, options: &ResultOptions) -> Result<String> {
    let Some(key) = options.json_key.as_deref().filter(|_| value.is_object()) else {
        return encode(value, options.pretty);
    };

    match get_by_path(value, key) {
        Some(found) if should_encode_as_json(found) => encode(found, options.pretty),
        Some(found) => Ok(plain_text(found)),
        None => Ok("null".to_string()),
    }
}
