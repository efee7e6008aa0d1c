//! Contact form validation.
//!
//! Submission is simulated locally; see `SubmitContactHandler`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Loose structural email check (`local@domain.tld`).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldKind,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Raw values submitted from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates trimmed values. Errors come back in field order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: FieldKind::Name,
                message: "Name is required.",
            });
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError {
                field: FieldKind::Email,
                message: "Email is required.",
            });
        } else if !is_valid_email(email) {
            errors.push(FieldError {
                field: FieldKind::Email,
                message: "Please enter a valid email address.",
            });
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: FieldKind::Message,
                message: "Message is required.",
            });
        }

        errors
    }
}

/// Border feedback shown when a field loses focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFeedback {
    Neutral,
    Error,
}

/// Feedback for a field on blur: empty required fields and malformed
/// (non-empty) email values are flagged.
pub fn field_feedback(kind: FieldKind, value: &str, required: bool) -> FieldFeedback {
    if required && value.trim().is_empty() {
        return FieldFeedback::Error;
    }
    if kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return FieldFeedback::Error;
    }
    FieldFeedback::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_has_no_errors() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn empty_form_reports_every_field_in_order() {
        let errors = ContactForm::new("  ", "", "\n").validate();
        let messages: Vec<_> = errors.iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec!["Name is required.", "Email is required.", "Message is required."]
        );
    }

    #[test]
    fn malformed_email_is_reported() {
        let errors = ContactForm::new("Ada", "ada@example", "Hi").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FieldKind::Email);
        assert_eq!(errors[0].to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn email_pattern_rejects_spaces_and_missing_parts() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
        assert!(!is_valid_email("a@.de"));
        assert!(!is_valid_email("plainaddress"));
    }

    #[test]
    fn blur_feedback_flags_required_and_bad_email() {
        assert_eq!(field_feedback(FieldKind::Name, " ", true), FieldFeedback::Error);
        assert_eq!(field_feedback(FieldKind::Name, " ", false), FieldFeedback::Neutral);
        assert_eq!(field_feedback(FieldKind::Email, "nope", false), FieldFeedback::Error);
        assert_eq!(field_feedback(FieldKind::Email, "", false), FieldFeedback::Neutral);
        assert_eq!(
            field_feedback(FieldKind::Email, "ok@mail.com", true),
            FieldFeedback::Neutral
        );
    }
}
