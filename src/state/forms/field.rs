//! Form field value objects

/// Input kind for single-line fields, mirrored into the rendered hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: InputKind,
    pub is_multiline: bool,
    pub required: bool,
}

impl FormField {
    /// Create a new single-line field
    pub fn single(name: &str, label: &str, kind: InputKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind,
            is_multiline: false,
            required: false,
        }
    }

    /// Create a new multi-line field
    pub fn multiline(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind: InputKind::Text,
            is_multiline: true,
            required: false,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Whether the field currently holds no input
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
