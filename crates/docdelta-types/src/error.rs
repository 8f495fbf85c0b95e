//! Error types for docdelta.
//!
//! Only boundary failures are errors. Conditions such as an empty original
//! document or a document without headers are encoded in the report instead.

use thiserror::Error;

use crate::document::DocumentVersion;

/// Errors that can occur before a comparison runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// The text of one document version could not be obtained.
    #[error("{version} document unavailable: {reason}")]
    InputUnavailable {
        version: DocumentVersion,
        reason: String,
    },

    /// A configuration value is outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be parsed.
    #[error("configuration parse error: {0}")]
    Config(String),
}

/// Convenience alias for docdelta results.
pub type DiffResult<T> = Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_unavailable_names_the_version() {
        let err = DiffError::InputUnavailable {
            version: DocumentVersion::Modified,
            reason: "no such file".into(),
        };
        assert_eq!(err.to_string(), "modified document unavailable: no such file");
    }

    #[test]
    fn invalid_config_message() {
        let err = DiffError::InvalidConfig("header_max_length must be positive".into());
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
