//! Nested object key lookup by `->` paths, e.g. `data->owner->name`.
//!
//! Only object keys are resolved; array indices are not.

use serde_json::Value;

pub const PATH_SEPARATOR: &str = "->";

/// Resolve `path` against `value` one key at a time.
///
/// Returns `None` if `value` (or any intermediate) is not an object, or a key
/// is missing.
pub fn get_by_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    let mut rest = path;
    loop {
        let object = current.as_object()?;
        match rest.split_once(PATH_SEPARATOR) {
            Some((key, tail)) => {
                current = object.get(key)?;
                rest = tail;
            }
            None => return object.get(rest),
        }
    }
}
