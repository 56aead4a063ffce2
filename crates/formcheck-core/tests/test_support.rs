//! Shared fixtures for the integration tests

#![allow(dead_code)]

use formcheck_core::{Field, Record};

/// The record from the registration example, valid in every field
pub fn valid_record() -> Record {
    Record::new()
        .with("firstName", "Jane")
        .with("lastName", "Doe")
        .with("username", "jdoe1")
        .with("email", "jane@example.com")
        .with("password", "secret12")
        .with("countryCode", "91")
        .with("phoneNo", "9876543210")
        .with("panNo", "ABCDE1234F")
        .with("aadharNo", "123456789012")
}

/// `valid_record()` with one field replaced
pub fn valid_record_with(field: Field, value: &str) -> Record {
    valid_record().with(field.name(), value)
}
