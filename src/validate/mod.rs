//! Argument validation: per-type checks and the spec matcher.
//!
//! Nothing here logs or retries; every failure comes back as an `ArgumentError`.

pub mod error;
pub mod parse;
pub mod types;

pub use error::ArgumentError;
pub use parse::{ParsedArguments, parse_arguments};
pub use types::{are_valid_ids, is_valid_id, validate_id, validate_ids, validate_type};
