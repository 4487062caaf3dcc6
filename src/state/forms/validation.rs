//! Validation schema for the contact form
//!
//! A pure rule set: `validate` maps a complete snapshot of form values to
//! per-field error messages. Each field's checks read the full snapshot,
//! so the email/phone cross-field requirement needs no shared context.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_EMAIL_OR_PHONE: &str = "Either email or phone is required";
pub const MSG_INVALID_PHONE: &str = "Invalid phone number";
pub const MSG_MESSAGE_REQUIRED: &str = "Message is required";

/// Snapshot of the form values at validation/submission time.
///
/// Empty optional fields are normalized to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

/// Per-field validation error messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    /// Record an error for a field; the first recorded message wins
    pub fn insert(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Get the error message for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9]{10,14}$").expect("valid phone pattern"))
}

/// Validate a snapshot of form values.
///
/// Rules:
/// - `name` is unconstrained.
/// - `email`, when present, must be a syntactically valid address.
/// - at least one of `email`/`phone` must be present; the violation is
///   attached to both fields.
/// - `phone`, when present, must be an optional `+` followed by 10-14 digits.
/// - `message` must be non-empty.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if let Some(email) = values.email.as_deref() {
        if !email_pattern().is_match(email) {
            errors.insert("email", MSG_INVALID_EMAIL);
        }
    }

    // Symmetric cross-field requirement: surfaced on both fields at once.
    if values.email.is_none() && values.phone.is_none() {
        errors.insert("email", MSG_EMAIL_OR_PHONE);
        errors.insert("phone", MSG_EMAIL_OR_PHONE);
    }

    if let Some(phone) = values.phone.as_deref() {
        if !phone_pattern().is_match(phone) {
            errors.insert("phone", MSG_INVALID_PHONE);
        }
    }

    if values.message.is_empty() {
        errors.insert("message", MSG_MESSAGE_REQUIRED);
    }

    errors
}
