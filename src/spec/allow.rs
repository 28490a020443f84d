//! Allow-list configuration (allow-list.json).
//!
//! JSON shape:
//! {
//!   "Boolean": ["true"],       // only "true" is accepted for Boolean args
//!   "ThumbnailFormat": []      // empty list: anything valid is accepted
//! }
//!
//! Types missing from the map are unrestricted.

use crate::Result;
use crate::validate::ArgumentError;

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AllowListConfig {
    allowed: HashMap<String, Vec<String>>,
}

impl AllowListConfig {
    pub fn new(allowed: HashMap<String, Vec<String>>) -> Self {
        Self { allowed }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("parse allow-list json")?;
        tracing::debug!(types = config.allowed.len(), "loaded allow-list");
        Ok(config)
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read allow-list file {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("allow-list file {}", path))
    }

    /// Check `value` against the permitted values for `type_name`.
    pub fn check(&self, type_name: &str, value: &str) -> std::result::Result<(), ArgumentError> {
        match self.allowed.get(type_name) {
            Some(permitted) if !permitted.is_empty() && !permitted.iter().any(|p| p == value) => {
                Err(ArgumentError::ArgNotAllowed {
                    value: value.to_string(),
                    type_name: type_name.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(json: &str) -> AllowListConfig {
        AllowListConfig::from_json_str(json).unwrap()
    }

    #[test]
    fn missing_type_is_unrestricted() {
        let c = AllowListConfig::default();
        assert!(c.check("Boolean", "false").is_ok());
    }

    #[test]
    fn empty_list_is_unrestricted() {
        let c = config(r#"{"Boolean": []}"#);
        assert!(c.check("Boolean", "true").is_ok());
        assert!(c.check("Boolean", "false").is_ok());
    }

    #[test]
    fn non_empty_list_rejects_other_values() {
        let c = config(r#"{"Boolean": ["true"]}"#);
        assert!(c.check("Boolean", "true").is_ok());
        assert_eq!(
            c.check("Boolean", "false"),
            Err(ArgumentError::ArgNotAllowed {
                value: "false".to_string(),
                type_name: "Boolean".to_string(),
            })
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        let c = config(r#"{"Boolean": ["true"]}"#);
        assert!(c.check("Boolean", "TRUE").is_err());
    }

    #[test]
    fn built_from_map() {
        let mut allowed = HashMap::new();
        allowed.insert("ThumbnailFormat".to_string(), vec!["Webp".to_string()]);
        let c = AllowListConfig::new(allowed);
        assert_eq!(c, config(r#"{"ThumbnailFormat": ["Webp"]}"#));
        assert!(c.check("ThumbnailFormat", "Webp").is_ok());
        assert!(c.check("ThumbnailFormat", "Png").is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AllowListConfig::from_json_str(r#"{"Boolean": "true"}"#).is_err());
    }
}
