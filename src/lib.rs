//! Argument validation and response shaping for Roblox web API calls.
//!
//! - `spec`: endpoint argument specifications + allow-list configuration
//! - `validate`: type validators and the positional/named argument matcher
//! - `json`: `->` path lookup and result serialization
//! - `cdn`: Roblox CDN URL check

pub mod cdn;
pub mod json;
pub mod spec;
pub mod validate;

pub use spec::{AllowListConfig, ArgumentSpecification, EndpointCatalog};
pub use validate::{ArgumentError, ParsedArguments, parse_arguments};

pub type Result<T> = anyhow::Result<T>;
