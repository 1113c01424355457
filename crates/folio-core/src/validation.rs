//! Submission validation rules.

use std::sync::OnceLock;

use regex::Regex;

/// Pattern an email address must match: something, `@`, something, `.`,
/// something, where no part contains whitespace or another `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Reasons a submission is rejected before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one of name, email, subject or message is absent or blank.
    #[error("All fields are required")]
    MissingFields,

    /// The email address does not have a `local@domain.tld` shape.
    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
        }
    }

    /// Reverse of [`ValidationError::code`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "missing_fields" => Some(Self::MissingFields),
            "invalid_email" => Some(Self::InvalidEmail),
            _ => None,
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Check an email address against the accepted shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// A required field counts as present when it has a non-whitespace character.
pub(crate) fn is_present(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in [
            "ada@example.com",
            "x@y.co",
            "first.last+tag@sub.domain.org",
            "a@b.c.d",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "not-an-email",
            "missing-at.example.com",
            "no-dot@example",
            "@example.com",
            "ada@.",
            "ada@example.",
            "two@@example.com",
            "ada@exa mple.com",
            " ada@example.com",
            "ada@example.com ",
            "",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn codes_round_trip() {
        for err in [ValidationError::MissingFields, ValidationError::InvalidEmail] {
            assert_eq!(ValidationError::from_code(err.code()), Some(err));
        }
        assert_eq!(ValidationError::from_code("not_found"), None);
    }

    #[test]
    fn blank_fields_are_not_present() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(!is_present(Some("  \t\n")));
        assert!(is_present(Some(" x ")));
    }
}
