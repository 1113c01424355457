//! Contact submissions and records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ContactId;
use crate::validation::{is_present, is_valid_email, ValidationError};

/// An inbound contact-form submission, as sent by an untrusted caller.
///
/// Every field is optional so that a missing key and an explicit `null`
/// are both reported as missing rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender name.
    #[serde(default)]
    pub name: Option<String>,
    /// Sender email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Message subject.
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Build a submission with every field present.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }
}

/// A submission that passed validation and may be stored.
///
/// Field values are kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl NewContact {
    /// Validate a submission.
    ///
    /// All four fields are checked for presence before the email format, so a
    /// submission that is both incomplete and malformed reports
    /// `MissingFields`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingFields` if any field is absent or blank.
    /// - `ValidationError::InvalidEmail` if the email has the wrong shape.
    pub fn parse(submission: ContactSubmission) -> Result<Self, ValidationError> {
        let ContactSubmission {
            name,
            email,
            subject,
            message,
        } = submission;

        let all_present = [&name, &email, &subject, &message]
            .into_iter()
            .all(|field| is_present(field.as_deref()));

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if all_present => {
                if !is_valid_email(&email) {
                    return Err(ValidationError::InvalidEmail);
                }
                Ok(Self {
                    name,
                    email,
                    subject,
                    message,
                })
            }
            _ => Err(ValidationError::MissingFields),
        }
    }

    /// Sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Message subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Store-assigned identifier.
    pub id: ContactId,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// When the record was stored.
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Create a record from a validated submission.
    #[must_use]
    pub fn new(id: ContactId, contact: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: contact.name,
            email: contact.email,
            subject: contact.subject,
            message: contact.message,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@example.com", "Hi", "Hello")
    }

    #[test]
    fn valid_submission_is_kept_verbatim() {
        let submission = ContactSubmission::new("  Ada ", "ada@example.com", "Hi\n", "Hello");
        let contact = NewContact::parse(submission).unwrap();
        assert_eq!(contact.name(), "  Ada ");
        assert_eq!(contact.subject(), "Hi\n");
    }

    #[test]
    fn each_missing_field_is_rejected() {
        let clears: [fn(&mut ContactSubmission); 4] = [
            |s| s.name = None,
            |s| s.email = None,
            |s| s.subject = None,
            |s| s.message = None,
        ];
        for clear in clears {
            let mut submission = ada();
            clear(&mut submission);
            assert_eq!(
                NewContact::parse(submission),
                Err(ValidationError::MissingFields)
            );
        }
    }

    #[test]
    fn empty_and_blank_fields_are_missing() {
        let mut empty = ada();
        empty.name = Some(String::new());
        assert_eq!(NewContact::parse(empty), Err(ValidationError::MissingFields));

        let mut blank = ada();
        blank.message = Some("   ".into());
        assert_eq!(NewContact::parse(blank), Err(ValidationError::MissingFields));
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let submission = ContactSubmission {
            name: None,
            email: Some("not-an-email".into()),
            subject: Some("s".into()),
            message: Some("m".into()),
        };
        assert_eq!(
            NewContact::parse(submission),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn bad_email_is_rejected() {
        let submission = ContactSubmission::new("Bob", "not-an-email", "s", "m");
        assert_eq!(
            NewContact::parse(submission),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name": null, "email": "a@b.co"}"#).unwrap();
        assert_eq!(submission.name, None);
        assert_eq!(submission.subject, None);
    }

    #[test]
    fn record_serializes_with_numeric_id_and_rfc3339_time() {
        let created_at = DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let contact = NewContact::parse(ada()).unwrap();
        let record = ContactRecord::new(ContactId::new(1), contact, created_at);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["created_at"], "2026-01-02T03:04:05Z");
    }
}
