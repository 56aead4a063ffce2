//! Unit tests for the rule table contents
//!
//! The table is the contract: every field's accepted inputs and its exact
//! failure message.

use formcheck_core::{Error, Field, RuleTable};

fn table() -> RuleTable {
    RuleTable::new().unwrap()
}

#[cfg(test)]
mod table_shape {
    use super::*;

    #[test]
    fn test_one_rule_per_field_in_declaration_order() {
        let table = table();
        assert_eq!(table.len(), 9);
        assert_eq!(table.fields().collect::<Vec<_>>(), Field::ALL);
        for field in Field::ALL {
            assert_eq!(table.rule(field).field(), field);
        }
    }

    #[test]
    fn test_get_by_name() {
        let table = table();
        let rule = table.get("panNo").unwrap();
        assert_eq!(rule.field(), Field::PanNo);
        assert_eq!(rule.message(), "PAN No. is not valid");
    }

    #[test]
    fn test_get_unvalidated_or_unknown_field_fails() {
        let table = table();
        for name in ["country", "city", "nickname", ""] {
            match table.get(name) {
                Err(Error::UnknownField { name: reported }) => assert_eq!(reported, name),
                other => panic!("expected UnknownField for {:?}, got {:?}", name, other.map(|r| r.field())),
            }
        }
    }

    #[test]
    fn test_messages_are_exact() {
        let table = table();
        let expected = [
            (Field::FirstName, "First Name should contain only letters"),
            (Field::LastName, "Last Name should contain only letters"),
            (Field::Username, "Username should contain only letters and numbers"),
            (Field::Email, "Email is not valid"),
            (
                Field::Password,
                "Password must be at least 8 characters long and contain at least one letter and one number",
            ),
            (Field::CountryCode, "Country code should contain only numbers"),
            (Field::PhoneNo, "Phone number should contain exactly 10 digits"),
            (Field::PanNo, "PAN No. is not valid"),
            (Field::AadharNo, "Aadhar No. should contain exactly 12 digits"),
        ];
        for (field, message) in expected {
            assert_eq!(table.rule(field).message(), message, "message for {}", field);
        }
    }
}

#[cfg(test)]
mod field_rules {
    use super::*;

    fn accepts(field: Field, value: &str) -> bool {
        table().rule(field).matches(value)
    }

    #[test]
    fn test_names_accept_ascii_letters_only() {
        for field in [Field::FirstName, Field::LastName] {
            assert!(accepts(field, "abc"));
            assert!(accepts(field, "Jane"));
            assert!(!accepts(field, "abc123"));
            assert!(!accepts(field, "Mary Ann"));
            assert!(!accepts(field, "José"));
            assert!(!accepts(field, "-Jane"));
        }
    }

    #[test]
    fn test_username() {
        assert!(accepts(Field::Username, "jdoe1"));
        assert!(accepts(Field::Username, "42"));
        assert!(!accepts(Field::Username, "j_doe"));
        assert!(!accepts(Field::Username, "jdoe!"));
    }

    #[test]
    fn test_email() {
        assert!(accepts(Field::Email, "jane@example.com"));
        assert!(accepts(Field::Email, "a@b.c"));
        assert!(accepts(Field::Email, "jane@mail.example.co.uk"));
        assert!(!accepts(Field::Email, "not-an-email"));
        assert!(!accepts(Field::Email, "jane@example"));
        assert!(!accepts(Field::Email, "jane@@example.com"));
        assert!(!accepts(Field::Email, "jane doe@example.com"));
        assert!(!accepts(Field::Email, "@example.com"));
        assert!(!accepts(Field::Email, "jane@example."));
    }

    #[test]
    fn test_email_whitespace_is_ecmascript_set() {
        assert!(!accepts(Field::Email, "ja\u{FEFF}ne@example.com"));
        assert!(!accepts(Field::Email, "jane@exa\u{3000}mple.com"));
        assert!(!accepts(Field::Email, "jane@example.c\u{A0}om"));
        assert!(!accepts(Field::Email, "jane\t@example.com"));
        assert!(accepts(Field::Email, "ja\u{85}ne@example.com"));
    }

    #[test]
    fn test_password_boundaries() {
        assert!(accepts(Field::Password, "abcd1234"));
        assert!(accepts(Field::Password, "1234567a"));
        assert!(!accepts(Field::Password, "abcdefgh"));
        assert!(!accepts(Field::Password, "12345678"));
        assert!(!accepts(Field::Password, "1234567"));
        assert!(!accepts(Field::Password, "abc123"));
        assert!(!accepts(Field::Password, "abcd 1234"));
        assert!(!accepts(Field::Password, "abcd1234!"));
    }

    #[test]
    fn test_country_code() {
        for ok in ["1", "91", "358", "1684"] {
            assert!(accepts(Field::CountryCode, ok), "{}", ok);
        }
        assert!(!accepts(Field::CountryCode, "12345"));
        assert!(!accepts(Field::CountryCode, "+91"));
    }

    #[test]
    fn test_digit_counts() {
        assert!(accepts(Field::PhoneNo, "9876543210"));
        assert!(!accepts(Field::PhoneNo, "987654321"));
        assert!(!accepts(Field::PhoneNo, "98765432101"));

        assert!(accepts(Field::AadharNo, "123456789012"));
        assert!(!accepts(Field::AadharNo, "12345678901"));
        assert!(!accepts(Field::AadharNo, "1234567890123"));
    }

    #[test]
    fn test_pan_shape_and_case() {
        assert!(accepts(Field::PanNo, "ABCDE1234F"));
        assert!(!accepts(Field::PanNo, "abcde1234f"));
        assert!(!accepts(Field::PanNo, "ABCDE1234FX"));
        assert!(!accepts(Field::PanNo, "ABCD12345F"));
    }

    #[test]
    fn test_empty_string_fails_every_rule() {
        for rule in &table() {
            assert!(!rule.matches(""), "{} accepted empty input", rule.field());
        }
    }

    #[test]
    fn test_trailing_newline_is_not_accepted() {
        for rule in &table() {
            assert!(!rule.matches("\n"));
        }
        assert!(!accepts(Field::PhoneNo, "9876543210\n"));
    }
}
