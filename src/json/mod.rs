//! JSON response shaping: `->` path lookup and result serialization.

pub mod path;
pub mod result;

pub use path::{PATH_SEPARATOR, get_by_path};
pub use result::{ResultOptions, create_result, plain_text, should_encode_as_json};
