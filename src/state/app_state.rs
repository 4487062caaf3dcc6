//! Application state definitions

use super::forms::{ContactForm, FieldErrors};
use super::submission::SubmissionState;

/// Everything the renderers read: form input, validation errors, and the
/// submission state. Mutated only by the app controller.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The contact form fields and focus
    pub form: ContactForm,
    /// Field-level errors from the last validation pass
    pub errors: FieldErrors,
    /// Current submission lifecycle state
    pub submission: SubmissionState,
}
