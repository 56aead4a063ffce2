//! The rule table: one pattern and one failure message per validated field
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::field::Field;
use regex::Regex;

/// Source form of a rule, compiled by [`RuleTable::new`]
struct RuleDef {
    field: Field,
    accept: &'static str,
    require: &'static [&'static str],
    message: &'static str,
}

const STANDARD_RULES: [RuleDef; 9] = [
    RuleDef {
        field: Field::FirstName,
        accept: r"^[a-zA-Z]+$",
        require: &[],
        message: "First Name should contain only letters",
    },
    RuleDef {
        field: Field::LastName,
        accept: r"^[a-zA-Z]+$",
        require: &[],
        message: "Last Name should contain only letters",
    },
    RuleDef {
        field: Field::Username,
        accept: r"^[a-zA-Z0-9]+$",
        require: &[],
        message: "Username should contain only letters and numbers",
    },
    RuleDef {
        field: Field::Email,
        // ECMAScript whitespace: unlike `\s` here, includes U+FEFF and excludes U+0085.
        accept: r"^[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+@[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+\.[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+$",
        require: &[],
        message: "Email is not valid",
    },
    RuleDef {
        field: Field::Password,
        accept: r"^[A-Za-z0-9]{8,}$",
        require: &[r"[A-Za-z]", r"[0-9]"],
        message: "Password must be at least 8 characters long and contain at least one letter and one number",
    },
    RuleDef {
        field: Field::CountryCode,
        accept: r"^[0-9]{1,4}$",
        require: &[],
        message: "Country code should contain only numbers",
    },
    RuleDef {
        field: Field::PhoneNo,
        accept: r"^[0-9]{10}$",
        require: &[],
        message: "Phone number should contain exactly 10 digits",
    },
    RuleDef {
        field: Field::PanNo,
        accept: r"^[A-Z]{5}[0-9]{4}[A-Z]$",
        require: &[],
        message: "PAN No. is not valid",
    },
    RuleDef {
        field: Field::AadharNo,
        accept: r"^[0-9]{12}$",
        require: &[],
        message: "Aadhar No. should contain exactly 12 digits",
    },
];

/// A compiled acceptance pattern.
///
/// `accept` is anchored and must match the whole value; each `require`
/// expression must occur somewhere in it. The split stands in for
/// look-ahead, which `regex` does not support.
#[derive(Debug, Clone)]
pub struct Pattern {
    accept: Regex,
    require: Vec<Regex>,
}

impl Pattern {
    /// Compile a pattern for `field`
    pub fn new(field: Field, accept: &str, require: &[&str]) -> Result<Self> {
        let compile = |source: &str| {
            Regex::new(source).map_err(|source| Error::InvalidPattern {
                field: field.name().to_string(),
                source,
            })
        };

        Ok(Self {
            accept: compile(accept)?,
            require: require.iter().map(|r| compile(*r)).collect::<Result<_>>()?,
        })
    }

    /// Whether `value` satisfies the pattern
    pub fn matches(&self, value: &str) -> bool {
        self.accept.is_match(value) && self.require.iter().all(|r| r.is_match(value))
    }

    /// The anchored acceptance expression
    pub fn accept_source(&self) -> &str {
        self.accept.as_str()
    }

    /// The required-content expressions
    pub fn require_sources(&self) -> impl Iterator<Item = &str> {
        self.require.iter().map(Regex::as_str)
    }
}

/// A validation rule for one field
#[derive(Debug, Clone)]
pub struct Rule {
    field: Field,
    pattern: Pattern,
    message: &'static str,
}

impl Rule {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Message shown when the value does not match
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern.matches(value)
    }

    /// `None` if `value` passes, otherwise the failure message
    pub fn check(&self, value: &str) -> Option<&'static str> {
        (!self.matches(value)).then_some(self.message)
    }
}

/// Immutable, ordered collection of rules, one per [`Field`]
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compile the standard rule table
    pub fn new() -> Result<Self> {
        let rules = STANDARD_RULES
            .iter()
            .map(|def| {
                Ok(Rule {
                    field: def.field,
                    pattern: Pattern::new(def.field, def.accept, def.require)?,
                    message: def.message,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Look up a rule by record key
    pub fn get(&self, name: &str) -> Result<&Rule> {
        let field = name.parse::<Field>()?;
        Ok(self.rule(field))
    }

    /// Look up the rule for a validated field
    pub fn rule(&self, field: Field) -> &Rule {
        // The table is built from STANDARD_RULES in Field declaration order.
        &self.rules[field as usize]
    }

    /// Rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Fields covered by the table, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.iter().map(Rule::field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules_follow_field_order() {
        let fields: Vec<Field> = STANDARD_RULES.iter().map(|def| def.field).collect();
        assert_eq!(fields, Field::ALL);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Pattern::new(Field::Email, r"^[a-z", &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref field, .. } if field == "email"));
    }

    #[test]
    fn test_require_expressions_all_apply() {
        let pattern = Pattern::new(Field::Password, r"^[a-z0-9]+$", &[r"[a-z]", r"[0-9]"]).unwrap();
        assert!(pattern.matches("abc1"));
        assert!(!pattern.matches("abcd"));
        assert!(!pattern.matches("1234"));
        assert_eq!(pattern.require_sources().count(), 2);
    }

    #[test]
    fn test_check_returns_message_on_failure() {
        let table = RuleTable::new().unwrap();
        let rule = table.rule(Field::PhoneNo);
        assert_eq!(rule.check("9876543210"), None);
        assert_eq!(
            rule.check("98765"),
            Some("Phone number should contain exactly 10 digits")
        );
    }

    #[test]
    fn test_digits_are_ascii_only() {
        let table = RuleTable::new().unwrap();
        // Arabic-Indic digits would satisfy a Unicode \d
        assert!(!table.rule(Field::CountryCode).matches("٩١"));
    }
}
