//! Validation module: rule table, engine and result types
//!
//! Every validated field has exactly one [`Rule`]. The [`ValidationEngine`]
//! checks all of them on each call and reports every failing field at once;
//! a failing field never stops the remaining checks.
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

pub mod engine;
pub mod result;
pub mod rules;

// Re-export commonly used types
pub use engine::{FormValidator, ValidationEngine};
pub use result::ValidationResult;
pub use rules::{Pattern, Rule, RuleTable};

/// Convenience function to create a validator over the standard rules
///
/// # Examples
///
/// ```rust
/// use formcheck_core::validation::{create_validator, FormValidator};
/// use formcheck_core::Record;
///
/// let engine = create_validator().unwrap();
/// let record = Record::new().with("firstName", "Jane");
///
/// let result = engine.evaluate(&record);
/// assert!(!result.is_valid());
/// assert!(result.error(formcheck_core::Field::FirstName).is_none());
/// ```
pub fn create_validator() -> crate::Result<ValidationEngine> {
    ValidationEngine::new()
}
