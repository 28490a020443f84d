use thiserror::Error;

/// A rejected argument. Carries the offending value and/or type name so the
/// caller can render its own localized message from `message_key` + `params`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("invalid id {value:?} for {type_name}")]
    InvalidId { type_name: String, value: String },

    #[error("invalid value {value:?} for {type_name}")]
    InvalidArg { type_name: String, value: String },

    #[error("value {value:?} is not allowed for {type_name}")]
    ArgNotAllowed { value: String, type_name: String },

    #[error("missing required argument of type {type_name}")]
    MissingArgument { type_name: String },

    #[error("too many required arguments: unexpected {token:?}")]
    TooManyRequiredArgs { token: String },

    #[error("optional argument {token:?} has no value")]
    MissingOptionalArgumentValue { token: String },

    #[error("unknown optional argument {name:?}")]
    UnknownOptionalArgument { name: String },
}

impl ArgumentError {
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "robloxapi-error-invalid-id",
            Self::InvalidArg { .. } => "robloxapi-error-invalid-argument",
            Self::ArgNotAllowed { .. } => "robloxapi-error-arg-not-allowed",
            Self::MissingArgument { .. } => "robloxapi-error-missing-argument",
            Self::TooManyRequiredArgs { .. } => "robloxapi-error-too-many-required-args",
            Self::MissingOptionalArgumentValue { .. } => {
                "robloxapi-error-missing-optional-argument-value"
            }
            Self::UnknownOptionalArgument { .. } => "robloxapi-error-unknown-optional-argument",
        }
    }

    /// Message parameters in the order the message expects them.
    pub fn params(&self) -> Vec<&str> {
        match self {
            Self::InvalidId { type_name, value } | Self::InvalidArg { type_name, value } => {
                vec![type_name.as_str(), value.as_str()]
            }
            Self::ArgNotAllowed { value, type_name } => vec![value.as_str(), type_name.as_str()],
            Self::MissingArgument { type_name } => vec![type_name.as_str()],
            Self::TooManyRequiredArgs { token } | Self::MissingOptionalArgumentValue { token } => {
                vec![token.as_str()]
            }
            Self::UnknownOptionalArgument { name } => vec![name.as_str()],
        }
    }
}
