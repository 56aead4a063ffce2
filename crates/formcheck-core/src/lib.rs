//! Formcheck Core - rule table and validation engine for form records
//!
//! This crate validates the registration form of a web front end: nine
//! named text fields, each checked against a full-string pattern, with one
//! human-readable message per failing field and an overall verdict.
//!
//! ## Features
//!
//! - **Rules as data**: one [`Rule`] (pattern + message) per [`Field`] in an
//!   ordered [`RuleTable`]
//! - **Whole-record evaluation**: every field is checked on every call, so
//!   all problems are reported at once
//! - **Pure engine**: [`ValidationEngine`] never mutates or keeps the record
//! - **Form controller**: mutable record state, last result, banner and a
//!   pluggable [`SubmissionSink`]
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_core::{FormValidator, Record, ValidationEngine};
//!
//! let engine = ValidationEngine::new().unwrap();
//! let record = Record::new()
//!     .with("firstName", "Jane")
//!     .with("lastName", "Doe")
//!     .with("username", "jdoe1")
//!     .with("email", "jane@example.com")
//!     .with("password", "secret12")
//!     .with("countryCode", "91")
//!     .with("phoneNo", "9876543210")
//!     .with("panNo", "ABCDE1234F")
//!     .with("aadharNo", "123456789012");
//!
//! let result = engine.evaluate(&record);
//! assert!(result.is_valid());
//! assert!(result.errors().is_empty());
//! ```
//!
//! ## Fields
//!
//! `firstName`, `lastName`, `username`, `email`, `password`, `countryCode`,
//! `phoneNo`, `panNo` and `aadharNo` are validated. `country` and `city`
//! belong to the form but have no rule and are always accepted.
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

pub mod controller;
pub mod error;
pub mod field;
pub mod record;
pub mod validation;

// Re-export commonly used types for convenience
pub use controller::{
    FormController, LogSink, MemorySink, Submission, SubmissionSink, SubmitOutcome,
    INVALID_FORM_BANNER,
};
pub use error::{Error, Result};
pub use field::{is_form_field, Field, UNVALIDATED_FIELDS};
pub use record::{Record, REDACTED};
pub use validation::{
    create_validator, FormValidator, Pattern, Rule, RuleTable, ValidationEngine,
    ValidationResult,
};
