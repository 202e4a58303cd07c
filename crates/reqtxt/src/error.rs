//! Errors produced while classifying requirements file lines.
//!
//! Every variant except `Io` is a rejection of malformed or unrecognized
//! input under strict mode. None of them are transient.

use thiserror::Error;

/// Errors that can occur while parsing a requirements file.
#[derive(Error, Debug)]
pub enum ReqtxtError {
    /// Option line whose flag is not in the directive table
    #[error("Unsupported flag '{flag}'")]
    UnsupportedFlag { flag: String },

    /// Option line with the wrong number of arguments for its flag
    #[error("Flag '{flag}' expects {expected} argument(s), got {actual}")]
    InvalidFlagArity {
        flag: String,
        expected: usize,
        actual: usize,
    },

    /// Requirement line with more than one `;`-separated marker segment
    #[error("Requirement '{requirement}' has {count} marker segments, at most one is allowed")]
    TooManyMarkers { requirement: String, count: usize },

    /// Right-hand side of `name @ url` is not a valid URL
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Package expression matched neither requirement grammar
    #[error("Invalid requirement '{requirement}'")]
    InvalidRequirement { requirement: String },

    /// Stored version constraint is not a PEP 440 specifier
    #[error("Invalid version specifier '{specifier}': {message}")]
    InvalidVersionSpecifier { specifier: String, message: String },

    /// Requirements file could not be read
    #[error("Failed to read requirements file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for requirements parsing.
pub type Result<T> = std::result::Result<T, ReqtxtError>;

impl ReqtxtError {
    /// Helper for creating unsupported flag errors
    pub fn unsupported_flag(flag: impl Into<String>) -> Self {
        Self::UnsupportedFlag { flag: flag.into() }
    }

    /// Helper for creating arity mismatch errors
    pub fn invalid_flag_arity(flag: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidFlagArity {
            flag: flag.into(),
            expected,
            actual,
        }
    }

    /// Helper for creating invalid requirement errors
    pub fn invalid_requirement(requirement: impl Into<String>) -> Self {
        Self::InvalidRequirement {
            requirement: requirement.into(),
        }
    }

    /// Helper for creating invalid version specifier errors
    pub fn invalid_version_specifier(
        specifier: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidVersionSpecifier {
            specifier: specifier.into(),
            message: message.into(),
        }
    }
}
