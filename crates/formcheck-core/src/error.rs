//! Error types for the formcheck core library
//!
//! Field validation failures are not errors: they are collected into a
//! [`ValidationResult`](crate::ValidationResult). The variants here are
//! contract violations between the form and the rule table, or failures of a
//! submission sink.
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for formcheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// A field name that is not part of the rule table or the form
    #[error("Unknown field: '{name}'")]
    UnknownField { name: String },

    /// A rule pattern that does not compile
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The submission sink rejected a valid record
    #[error("Submission failed: {message}")]
    Submission { message: String },
}

impl Error {
    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create a submission error
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    /// Check whether this error is a mismatch between the form's field set
    /// and the rule table
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnknownField { .. } | Self::InvalidPattern { .. })
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
