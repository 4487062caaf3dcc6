//! Form state management

mod contact;
mod field;
mod validation;

pub use contact::{ContactForm, Form};
pub use field::{FormField, InputKind};
pub use validation::{
    validate, FieldErrors, FormValues, MSG_EMAIL_OR_PHONE, MSG_INVALID_EMAIL, MSG_INVALID_PHONE,
    MSG_MESSAGE_REQUIRED,
};
