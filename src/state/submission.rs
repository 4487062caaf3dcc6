//! Submission state machine
//!
//! Owned exclusively by the app controller; renderers only read it.
//! `Succeeded`/`Failed` transition back through validation on the next
//! submit attempt, so there is no explicit acknowledge transition.

/// Lifecycle of a single submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    /// Returns true while a gateway call is in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// The user-visible result line, if the last attempt finished
    pub fn result_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded(msg) | SubmissionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
