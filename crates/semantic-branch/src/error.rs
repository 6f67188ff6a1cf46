//! Error types for semantic branch operations.

use thiserror::Error;

/// Errors that can occur while validating names or resolving categories.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SemanticBranchError {
    /// A value expected to be a bare semantic token failed validation.
    #[error("'{value}' is not a valid semantic name")]
    InvalidSemanticName { value: String },

    /// No built-in category has this identifier.
    #[error("unknown semantic branch category: {name}")]
    UnknownCategory { name: String },

    /// No canonical stub has this identifier.
    #[error("unknown semantic stub: {value}")]
    UnknownStub { value: String },

    /// A classifier configuration could not be parsed.
    #[error("invalid classifier config: {0}")]
    Config(String),
}

impl SemanticBranchError {
    /// The offending value, for errors that carry one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidSemanticName { value } | Self::UnknownStub { value } => Some(value),
            Self::UnknownCategory { name } => Some(name),
            Self::Config(_) => None,
        }
    }
}

/// Convenience type alias for semantic branch operations.
pub type Result<T> = std::result::Result<T, SemanticBranchError>;
