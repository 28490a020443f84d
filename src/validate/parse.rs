//! Match raw tokens against an endpoint's argument specification.
//!
//! Tokens look like a template invocation split on `|`:
//!   1234 | 150x150 | format=Png | isCircular=true
//! Required args come first, positionally, in declared order. Everything after
//! them must be `name=value`.

use crate::spec::{AllowListConfig, ArgumentSpecification};
use crate::validate::{ArgumentError, validate_type};

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArguments {
    /// One value per required arg, in declared order.
    pub required: Vec<String>,
    /// Lower-cased option name -> value.
    pub optional: BTreeMap<String, String>,
}

fn check_value(
    type_name: &str,
    value: &str,
    config: &AllowListConfig,
) -> Result<(), ArgumentError> {
    validate_type(type_name, value)?;
    config.check(type_name, value)
}

/// Parse `tokens` against `spec`. Stops at the first bad token.
///
/// # Panics
///
/// If `spec` names an unknown argument type (see `validate_type`).
pub fn parse_arguments<S: AsRef<str>>(
    spec: &ArgumentSpecification,
    tokens: &[S],
    config: &AllowListConfig,
) -> Result<ParsedArguments, ArgumentError> {
    let mut tokens = tokens.iter().map(|t| t.as_ref());

    let mut required = Vec::with_capacity(spec.required_args().len());
    for type_name in spec.required_args() {
        let Some(value) = tokens.next() else {
            return Err(ArgumentError::MissingArgument {
                type_name: type_name.clone(),
            });
        };
        check_value(type_name, value, config)?;
        required.push(value.to_string());
    }

    let mut optional = BTreeMap::new();
    for (i, token) in tokens.enumerate() {
        let Some((name, value)) = token.split_once('=') else {
            // A bare token right after the required args is most likely one
            // positional arg too many.
            return Err(if i == 0 {
                ArgumentError::TooManyRequiredArgs {
                    token: token.to_string(),
                }
            } else {
                ArgumentError::MissingOptionalArgumentValue {
                    token: token.to_string(),
                }
            });
        };

        let name = name.to_ascii_lowercase();
        let Some(type_name) = spec.optional_type(&name) else {
            return Err(ArgumentError::UnknownOptionalArgument { name });
        };
        check_value(type_name, value, config)?;
        optional.insert(name, value.to_string());
    }

    Ok(ParsedArguments { required, optional })
}
