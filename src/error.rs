//! Error types for reply parsing

use thiserror::Error;

/// Errors that can occur while setting up a parser
///
/// Parsing a body never fails; every string splits into a reply and a chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A configuration threshold is out of range
    #[error("Invalid parser configuration for {field}: {details}")]
    InvalidConfig { field: String, details: String },
}

impl ParseError {
    pub(crate) fn invalid_config(field: &str, details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            details: details.into(),
        }
    }
}

/// Result type for reply parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
