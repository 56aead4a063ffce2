//! The closed set of form fields
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A form field that carries a validation rule.
///
/// Declaration order is the order in which rules are evaluated and the order
/// in which errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    CountryCode,
    PhoneNo,
    PanNo,
    AadharNo,
}

/// Free-choice selections that are part of the form but have no rule
pub const UNVALIDATED_FIELDS: [&str; 2] = ["country", "city"];

impl Field {
    /// Every validated field, in declaration order
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::CountryCode,
        Field::PhoneNo,
        Field::PanNo,
        Field::AadharNo,
    ];

    /// The record key for this field
    pub const fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::CountryCode => "countryCode",
            Field::PhoneNo => "phoneNo",
            Field::PanNo => "panNo",
            Field::AadharNo => "aadharNo",
        }
    }

    /// The label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::CountryCode => "Country code",
            Field::PhoneNo => "Phone No.",
            Field::PanNo => "PAN No.",
            Field::AadharNo => "Aadhar No.",
        }
    }

    /// Look up a validated field by its record key
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Whether a value of this field should be masked in logs and output
    pub fn is_sensitive(self) -> bool {
        matches!(self, Field::Password)
    }
}

/// Whether `name` belongs to the form at all, validated or not
pub fn is_form_field(name: &str) -> bool {
    Field::from_name(name).is_some() || UNVALIDATED_FIELDS.contains(&name)
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::from_name(s).ok_or_else(|| Error::unknown_field(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_unvalidated_fields_are_not_rule_fields() {
        for name in UNVALIDATED_FIELDS {
            assert!(Field::from_name(name).is_none());
            assert!(is_form_field(name));
        }
        assert!("country".parse::<Field>().is_err());
    }

    #[test]
    fn test_unknown_name() {
        assert!(!is_form_field("nickname"));
        assert!(matches!(
            "FirstName".parse::<Field>(),
            Err(Error::UnknownField { name }) if name == "FirstName"
        ));
    }

    #[test]
    fn test_serde_uses_record_keys() {
        assert_eq!(serde_json::to_string(&Field::PanNo).unwrap(), "\"panNo\"");
        let field: Field = serde_json::from_str("\"aadharNo\"").unwrap();
        assert_eq!(field, Field::AadharNo);
    }

    #[test]
    fn test_declaration_order_is_ord() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }
}
