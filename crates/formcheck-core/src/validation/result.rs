//! The outcome of one evaluation
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

use crate::field::Field;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Overall validity plus one message per failing field.
///
/// `valid` is derived from `errors` at construction, so `valid` is true
/// exactly when no field failed. Results are never mutated; the next
/// evaluation produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// Build a result from the collected field failures
    pub fn from_errors(errors: BTreeMap<Field, String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A result with no failures
    pub fn valid() -> Self {
        Self::from_errors(BTreeMap::new())
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failing fields and their messages
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// The failure message for `field`, if it failed
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in declaration order
    pub fn failing_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn into_errors(self) -> BTreeMap<Field, String> {
        self.errors
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return write!(f, "Record is valid");
        }

        write!(f, "{} field(s) failed validation:", self.errors.len())?;
        for (field, message) in &self.errors {
            write!(f, "\n  - {}: {}", field, message)?;
        }
        Ok(())
    }
}
