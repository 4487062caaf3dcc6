//! Contact form aggregate and focus handling

use super::field::{FormField, InputKind};
use super::validation::FormValues;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The fixed four-field contact form plus its submit control
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::single("name", "Name", InputKind::Text),
            email: FormField::single("email", "Email", InputKind::Email),
            phone: FormField::single("phone", "Phone", InputKind::Tel),
            message: FormField::multiline("message", "Message").required(),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit control is currently focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == 4
    }

    /// Returns true if the active field accepts newlines
    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Snapshot the current input as values for validation/submission.
    /// Empty optional fields become `None`.
    pub fn values(&self) -> FormValues {
        let optional = |field: &FormField| {
            if field.is_empty() {
                None
            } else {
                Some(field.as_text().to_string())
            }
        };
        FormValues {
            name: optional(&self.name),
            email: optional(&self.email),
            phone: optional(&self.phone),
            message: self.message.as_text().to_string(),
        }
    }

    /// Clear every field and return focus to the first one
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, phone, message, submit control
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.phone,
            // For the submit control (index 4), return message as dummy
            // (won't be used for text input)
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.message),
            // Index 4 is the submit control, no FormField for it
            _ => None,
        }
    }
}
