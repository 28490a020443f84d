//! Per-type value validators.

use crate::spec::ArgType;
use crate::validate::ArgumentError;

use regex::Regex;
use std::sync::LazyLock;

static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,16}$").unwrap());

static THUMBNAIL_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}x[0-9]{1,3}$").unwrap());

// No lookahead in `regex`: length/charset and underscore placement are two checks.
static USERNAME_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,20}$").unwrap());
static USERNAME_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^_]+_?[^_]+$").unwrap());

const THUMBNAIL_FORMATS: &[&str] = &["Png", "Webp"];

const RETURN_POLICIES: &[&str] = &[
    "PlaceHolder",
    "ForcePlaceHolder",
    "AutoGenerated",
    "ForceAutoGenerated",
];

pub fn is_valid_id(id: Option<&str>) -> bool {
    id.is_some_and(|id| ID_RE.is_match(id))
}

/// True if every id is valid. An empty collection is valid.
pub fn are_valid_ids<'a, I>(ids: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    ids.into_iter().all(is_valid_id)
}

pub fn validate_id(type_name: &str, id: Option<&str>) -> Result<(), ArgumentError> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(ArgumentError::InvalidId {
            type_name: type_name.to_string(),
            value: id.unwrap_or_default().to_string(),
        })
    }
}

/// Fails on the first invalid id.
pub fn validate_ids<'a, I>(type_name: &str, ids: I) -> Result<(), ArgumentError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    ids.into_iter().try_for_each(|id| validate_id(type_name, id))
}

fn is_valid_username(value: &str) -> bool {
    USERNAME_CHARS_RE.is_match(value) && USERNAME_UNDERSCORE_RE.is_match(value)
}

/// Validate `value` as an argument of type `type_name`.
///
/// # Panics
///
/// If `type_name` is not a known argument type. Type names come from endpoint
/// definitions, never from user input, so this is a broken specification.
pub fn validate_type(type_name: &str, value: &str) -> Result<(), ArgumentError> {
    let Some(arg_type) = ArgType::from_name(type_name) else {
        panic!("unknown argument type {type_name:?} in argument specification");
    };

    let valid = match arg_type {
        ArgType::Id => return validate_id(type_name, Some(value)),
        ArgType::ThumbnailSize => THUMBNAIL_SIZE_RE.is_match(value),
        ArgType::Username => is_valid_username(value),
        ArgType::Boolean => {
            value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
        }
        ArgType::String => true,
        ArgType::ThumbnailFormat => THUMBNAIL_FORMATS.contains(&value),
        ArgType::ReturnPolicy => RETURN_POLICIES.contains(&value),
    };

    if valid {
        Ok(())
    } else {
        Err(ArgumentError::InvalidArg {
            type_name: type_name.to_string(),
            value: value.to_string(),
        })
    }
}
