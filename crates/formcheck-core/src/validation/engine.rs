//! The validation engine
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::field::is_form_field;
use crate::record::Record;
use crate::validation::result::ValidationResult;
use crate::validation::rules::RuleTable;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Seam between a form and whatever decides whether its record is valid
pub trait FormValidator {
    /// Check every field of `record` and collect all failures
    fn evaluate(&self, record: &Record) -> ValidationResult;

    /// Convenience check that discards the messages
    fn is_valid(&self, record: &Record) -> bool {
        self.evaluate(record).is_valid()
    }

    /// `(field name, message)` pairs for the failing fields
    fn collect_errors(&self, record: &Record) -> Vec<(String, String)> {
        self.evaluate(record)
            .into_errors()
            .into_iter()
            .map(|(field, message)| (field.name().to_string(), message))
            .collect()
    }
}

/// Stateless validator over the standard [`RuleTable`].
///
/// Cloning shares the compiled table.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    table: Arc<RuleTable>,
}

impl ValidationEngine {
    /// Create an engine around the standard rule table
    pub fn new() -> Result<Self> {
        Ok(Self::with_table(RuleTable::new()?))
    }

    pub fn with_table(table: RuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Evaluate after rejecting names that are not part of the form.
    ///
    /// A record key the form does not know about means the form and the
    /// rule table have drifted apart; that is reported as
    /// [`Error::UnknownField`] instead of being ignored.
    pub fn evaluate_strict(&self, record: &Record) -> Result<ValidationResult> {
        if let Some(name) = record.names().find(|name| !is_form_field(name)) {
            return Err(Error::unknown_field(name));
        }
        Ok(self.evaluate(record))
    }
}

impl FormValidator for ValidationEngine {
    fn evaluate(&self, record: &Record) -> ValidationResult {
        let mut errors = BTreeMap::new();

        for rule in self.table.iter() {
            if let Some(message) = rule.check(record.value(rule.field())) {
                errors.insert(rule.field(), message.to_string());
            }
        }

        let result = ValidationResult::from_errors(errors);
        debug!(
            valid = result.is_valid(),
            failing = ?result.failing_fields().map(|f| f.name()).collect::<Vec<_>>(),
            "Record evaluated"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_empty_record_fails_every_rule() {
        let engine = ValidationEngine::new().unwrap();
        let result = engine.evaluate(&Record::new());
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), Field::ALL.len());
    }

    #[test]
    fn test_strict_rejects_unknown_key() {
        let engine = ValidationEngine::new().unwrap();
        let record = Record::new().with("nickname", "jd");
        assert!(matches!(
            engine.evaluate_strict(&record),
            Err(Error::UnknownField { name }) if name == "nickname"
        ));
    }

    #[test]
    fn test_clone_shares_table() {
        let engine = ValidationEngine::new().unwrap();
        let clone = engine.clone();
        assert!(std::ptr::eq(engine.table(), clone.table()));
    }

    #[test]
    fn test_collect_errors_uses_record_keys() {
        let engine = ValidationEngine::new().unwrap();
        let errors = engine.collect_errors(&Record::new());
        assert_eq!(errors[0].0, "firstName");
        assert_eq!(errors[8].0, "aadharNo");
    }
}
