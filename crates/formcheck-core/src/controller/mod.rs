//! Form controller: the mutable side of a form
//!
//! The controller owns the current record, the password visibility toggle
//! and the result of the last submit. It calls the validator only on submit
//! and hands the record to a [`SubmissionSink`] only when it is valid.
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

pub mod sink;

pub use sink::{LogSink, MemorySink, Submission, SubmissionSink};

use crate::error::{Error, Result};
use crate::field::{is_form_field, Field, UNVALIDATED_FIELDS};
use crate::record::Record;
use crate::validation::{FormValidator, ValidationEngine, ValidationResult};
use tracing::{debug, info, warn};

/// Message shown above the form after a failed submit
pub const INVALID_FORM_BANNER: &str = "Please fix the errors in the form";

/// What happened to a submitted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was valid and the sink accepted it
    Submitted,
    /// The record failed validation and was not forwarded
    Rejected { failing: usize },
}

/// Owner of a form's state
#[derive(Debug)]
pub struct FormController<V = ValidationEngine> {
    validator: V,
    record: Record,
    show_password: bool,
    last: Option<ValidationResult>,
}

impl FormController<ValidationEngine> {
    /// A controller over the standard rules
    pub fn standard() -> Result<Self> {
        Ok(Self::new(ValidationEngine::new()?))
    }
}

impl<V: FormValidator> FormController<V> {
    /// Create a controller with every form field set to `""`
    pub fn new(validator: V) -> Self {
        let record = Field::ALL
            .iter()
            .map(|field| field.name())
            .chain(UNVALIDATED_FIELDS)
            .map(|name| (name, ""))
            .collect();

        Self {
            validator,
            record,
            show_password: false,
            last: None,
        }
    }

    /// Update one input
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !is_form_field(name) {
            warn!(field = %name, "Rejected update to unknown field");
            return Err(Error::unknown_field(name));
        }
        self.record.insert(name, value);
        Ok(())
    }

    /// Copy every entry of `record` into the form
    pub fn load(&mut self, record: &Record) -> Result<()> {
        for (name, value) in record.iter() {
            self.set_value(name, value)?;
        }
        Ok(())
    }

    pub fn value(&self, name: &str) -> &str {
        self.record.get(name)
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Flip password visibility; this never touches the record
    pub fn toggle_show_password(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    /// Validate the whole record and forward it to `sink` if it passes.
    ///
    /// The stored result is replaced on every call. Sink failures are
    /// returned as errors; the stored result still reflects the evaluation.
    pub fn submit<S: SubmissionSink + ?Sized>(&mut self, sink: &mut S) -> Result<SubmitOutcome> {
        let result = self.validator.evaluate(&self.record);
        let outcome = if result.is_valid() {
            SubmitOutcome::Submitted
        } else {
            SubmitOutcome::Rejected {
                failing: result.error_count(),
            }
        };
        self.last = Some(result);

        match outcome {
            SubmitOutcome::Submitted => {
                sink.submit(&self.record)?;
                info!("Record forwarded to submission sink");
            }
            SubmitOutcome::Rejected { failing } => {
                debug!(failing, "Submit rejected");
            }
        }

        Ok(outcome)
    }

    /// The result of the last submit, if any
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last.as_ref()
    }

    /// Error to show under `field`
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.last.as_ref().and_then(|result| result.error(field))
    }

    /// Feedback for the shared country code / phone number slot
    pub fn phone_feedback(&self) -> Option<&str> {
        self.error_for(Field::CountryCode)
            .or_else(|| self.error_for(Field::PhoneNo))
    }

    /// Banner shown while the last submit was rejected
    pub fn banner(&self) -> Option<&'static str> {
        match &self.last {
            Some(result) if !result.is_valid() => Some(INVALID_FORM_BANNER),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn submit(&mut self, _record: &Record) -> Result<()> {
            Err(Error::submission("sink offline"))
        }
    }

    fn filled() -> FormController {
        let mut form = FormController::standard().unwrap();
        for (name, value) in [
            ("firstName", "Jane"),
            ("lastName", "Doe"),
            ("username", "jdoe1"),
            ("email", "jane@example.com"),
            ("password", "secret12"),
            ("countryCode", "91"),
            ("phoneNo", "9876543210"),
            ("panNo", "ABCDE1234F"),
            ("aadharNo", "123456789012"),
        ] {
            form.set_value(name, value).unwrap();
        }
        form
    }

    #[test]
    fn test_new_form_has_every_field_empty() {
        let form = FormController::standard().unwrap();
        assert_eq!(form.record().len(), 11);
        assert_eq!(form.value("city"), "");
        assert!(form.banner().is_none());
    }

    #[test]
    fn test_toggle_does_not_touch_record() {
        let mut form = filled();
        let before = form.record().clone();
        assert!(form.toggle_show_password());
        assert!(!form.toggle_show_password());
        assert_eq!(form.record(), &before);
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut form = filled();
        let err = form.submit(&mut FailingSink).unwrap_err();
        assert!(matches!(err, Error::Submission { .. }));
        assert!(form.last_result().unwrap().is_valid());
    }

    #[test]
    fn test_phone_feedback_prefers_country_code() {
        let mut form = filled();
        form.set_value("countryCode", "+91").unwrap();
        form.set_value("phoneNo", "123").unwrap();
        form.submit(&mut MemorySink::new()).unwrap();
        assert_eq!(
            form.phone_feedback(),
            Some("Country code should contain only numbers")
        );

        form.set_value("countryCode", "91").unwrap();
        form.submit(&mut MemorySink::new()).unwrap();
        assert_eq!(
            form.phone_feedback(),
            Some("Phone number should contain exactly 10 digits")
        );
    }
}
