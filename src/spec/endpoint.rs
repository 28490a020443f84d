//! Endpoint argument specifications (endpoints.json).
//!
//! JSON shape:
//! {
//!   "endpoints": [
//!     {
//!       "name": "userAvatarThumbnail",
//!       "required_args": ["UserId", "ThumbnailSize"],   // positional, in order
//!       "optional_args": {                              // name=value, any order
//!         "format": "ThumbnailFormat",
//!         "isCircular": "Boolean"
//!       }
//!     },
//!     ...
//!   ]
//! }
//!
//! We check names are unique, every type name is known, and lower-case the
//! optional argument names.

use crate::Result;
use crate::spec::ArgType;

use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsSpec {
    #[serde(default)]
    pub endpoints: Vec<RawEndpoint>,
}

/// Raw endpoint shape as it appears in endpoints.json.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEndpoint {
    pub name: String,

    #[serde(default)]
    pub required_args: Vec<String>,

    #[serde(default)]
    pub optional_args: BTreeMap<String, String>,
}

/// Declared arguments of one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSpecification {
    required_args: Vec<String>,
    optional_args: HashMap<String, String>,
}

impl ArgumentSpecification {
    /// Option names are stored lower-cased; a later name that collides after
    /// lower-casing replaces the earlier one.
    pub fn new<R, O, K, V>(required_args: R, optional_args: O) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        O: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            required_args: required_args.into_iter().map(Into::into).collect(),
            optional_args: optional_args
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
                .collect(),
        }
    }

    pub fn required_args(&self) -> &[String] {
        &self.required_args
    }

    pub fn optional_args(&self) -> &HashMap<String, String> {
        &self.optional_args
    }

    /// Type name of an optional argument, looked up by lower-cased name.
    pub fn optional_type(&self, name: &str) -> Option<&str> {
        self.optional_args.get(name).map(String::as_str)
    }

    /// First type name that does not resolve to an `ArgType`.
    pub fn unknown_type(&self) -> Option<&str> {
        self.required_args
            .iter()
            .chain(self.optional_args.values())
            .map(String::as_str)
            .find(|t| ArgType::from_name(t).is_none())
    }
}

/// Validated endpoints keyed by name.
#[derive(Debug, Clone, Default)]
pub struct EndpointCatalog {
    pub endpoints: BTreeMap<String, ArgumentSpecification>,
}

impl EndpointCatalog {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let spec: EndpointsSpec = serde_json::from_str(text).context("parse endpoints json")?;
        spec.validate_and_build()
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read endpoints file {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("endpoints file {}", path))
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentSpecification> {
        self.endpoints.get(name)
    }
}

impl EndpointsSpec {
    /// Check every endpoint and build the catalog.
    pub fn validate_and_build(&self) -> Result<EndpointCatalog> {
        let mut endpoints = BTreeMap::new();
        for raw in &self.endpoints {
            if endpoints.contains_key(&raw.name) {
                bail!("duplicate endpoint name in endpoints.json: {}", raw.name);
            }

            let mut lowered = BTreeMap::new();
            for name in raw.optional_args.keys() {
                if let Some(prev) = lowered.insert(name.to_ascii_lowercase(), name) {
                    bail!(
                        "endpoint {} declares optional args {} and {} which collide when lower-cased",
                        raw.name,
                        prev,
                        name
                    );
                }
            }

            let spec = ArgumentSpecification::new(
                raw.required_args.iter().cloned(),
                raw.optional_args.iter().map(|(k, v)| (k, v.clone())),
            );
            if let Some(t) = spec.unknown_type() {
                bail!("endpoint {} uses unknown argument type {}", raw.name, t);
            }

            tracing::debug!(
                endpoint = %raw.name,
                required = spec.required_args().len(),
                optional = spec.optional_args().len(),
                "loaded endpoint"
            );
            endpoints.insert(raw.name.clone(), spec);
        }

        if endpoints.is_empty() {
            bail!("endpoints.json contained no endpoints");
        }

        Ok(EndpointCatalog { endpoints })
    }
}
