//! Argument type names as they appear in endpoint specifications.
//!
//! Any name ending in "id" (case-insensitive) is a numeric id: "UserId",
//! "GroupId", "universeID" all resolve to `ArgType::Id`. Everything else must
//! match one of the fixed names exactly.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    Id,
    ThumbnailSize,
    Username,
    Boolean,
    String,
    ThumbnailFormat,
    ReturnPolicy,
}

impl ArgType {
    /// Resolve a type name. `None` means the name is not a known type.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.to_ascii_lowercase().ends_with("id") {
            return Some(Self::Id);
        }
        match name {
            "ThumbnailSize" => Some(Self::ThumbnailSize),
            "Username" => Some(Self::Username),
            "Boolean" => Some(Self::Boolean),
            "String" => Some(Self::String),
            "ThumbnailFormat" => Some(Self::ThumbnailFormat),
            "ReturnPolicy" => Some(Self::ReturnPolicy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_suffix_is_case_insensitive() {
        assert_eq!(ArgType::from_name("UserId"), Some(ArgType::Id));
        assert_eq!(ArgType::from_name("universeID"), Some(ArgType::Id));
        assert_eq!(ArgType::from_name("id"), Some(ArgType::Id));
    }

    #[test]
    fn fixed_names_are_case_sensitive() {
        assert_eq!(ArgType::from_name("Boolean"), Some(ArgType::Boolean));
        assert_eq!(ArgType::from_name("boolean"), None);
        assert_eq!(ArgType::from_name("Integer"), None);
    }
}
