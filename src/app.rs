//! Application state and core logic

use crate::gateway::{GatewayError, SubmissionGateway};
use crate::state::{validate, AppState, FieldErrors, Form, SubmissionState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result line shown after a successful submission
const SUCCESS_MESSAGE: &str = "Form submitted successfully";

/// Outcome of one gateway call, delivered back to the event loop
type SubmitOutcome = Result<(), GatewayError>;

/// Main application struct: owns the state and drives the submission
/// state machine. Renderers read `state`; nothing else mutates it.
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission gateway (simulated here, an HTTP client in production)
    gateway: Arc<dyn SubmissionGateway>,
    /// Channel the spawned gateway call reports back on
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance over the given gateway
    pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            gateway,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_control = self.state.form.is_submit_active();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Submit shortcut works from anywhere
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Enter if on_submit_control => self.submit(),
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if self.state.form.is_active_field_multiline() {
                    self.state.form.get_active_field_mut().push_char('\n');
                }
            }
            KeyCode::Char(c) if !on_submit_control => {
                self.state.form.get_active_field_mut().push_char(c);
            }
            KeyCode::Backspace if !on_submit_control => {
                self.state.form.get_active_field_mut().pop_char();
            }
            _ => {}
        }
        Ok(())
    }

    /// Attempt a submission.
    ///
    /// Validation runs to completion first; the gateway is only called when
    /// it passes, and at most one call is in flight (the submit control is
    /// a no-op while `Submitting`).
    pub fn submit(&mut self) {
        if self.state.submission.is_submitting() {
            return;
        }

        let values = self.state.form.values();
        let errors = validate(&values);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "validation failed");
            self.state.errors = errors;
            return;
        }

        self.state.errors = FieldErrors::default();
        self.state.submission = SubmissionState::Submitting;
        tracing::info!("submitting contact form");

        let gateway = Arc::clone(&self.gateway);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = gateway.submit(values).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(outcome);
        });
    }

    /// Drain any finished gateway calls and apply them to the state.
    /// Called once per event-loop tick.
    pub fn poll_submission(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            Ok(()) => {
                tracing::info!("submission accepted");
                self.state.form.reset();
                self.state.submission = SubmissionState::Succeeded(SUCCESS_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission rejected");
                self.state.submission = SubmissionState::Failed(err.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockSubmissionGateway;
    use crate::state::{MSG_EMAIL_OR_PHONE, MSG_MESSAGE_REQUIRED};
    use pretty_assertions::assert_eq;

    fn app_with(mock: MockSubmissionGateway) -> App {
        App::new(Arc::new(mock))
    }

    fn fill_valid_form(app: &mut App, email: &str) {
        app.state.form.email.set_text(email.to_string());
        app.state.form.message.set_text("hi".to_string());
    }

    /// Wait for the spawned gateway call and apply its outcome
    async fn finish_submission(app: &mut App) {
        let outcome = app.outcome_rx.recv().await.expect("submission outcome");
        app.apply_outcome(outcome);
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_valid_submit_succeeds_and_resets_fields() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit()
            .withf(|v| v.email.as_deref() == Some("x@y.com") && v.message == "hi")
            .times(1)
            .returning(|_| Ok(()));
        let mut app = app_with(mock);
        fill_valid_form(&mut app, "x@y.com");

        app.submit();
        assert_eq!(app.state.submission, SubmissionState::Submitting);
        assert!(app.state.errors.is_empty());

        finish_submission(&mut app).await;
        assert_eq!(
            app.state.submission,
            SubmissionState::Succeeded("Form submitted successfully".to_string())
        );
        assert!(app.state.form.email.is_empty());
        assert!(app.state.form.message.is_empty());
        assert_eq!(app.state.form.active_field_index, 0);
    }

    #[tokio::test]
    async fn test_rejected_submit_shows_message_and_keeps_values() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit().times(1).returning(|_| {
            Err(GatewayError::Rejected {
                message: "Neexistující emailová adresa".to_string(),
            })
        });
        let mut app = app_with(mock);
        fill_valid_form(&mut app, "neexistujici@email.cz");

        app.submit();
        assert_eq!(app.state.submission, SubmissionState::Submitting);

        finish_submission(&mut app).await;
        assert_eq!(
            app.state.submission,
            SubmissionState::Failed("Neexistující emailová adresa".to_string())
        );
        // Entered values are preserved for editing and resubmission
        assert_eq!(app.state.form.email.as_text(), "neexistujici@email.cz");
        assert_eq!(app.state.form.message.as_text(), "hi");
    }

    #[tokio::test]
    async fn test_invalid_submit_makes_no_gateway_call() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit().never();
        let mut app = app_with(mock);

        app.submit();
        assert_eq!(app.state.submission, SubmissionState::Idle);
        assert_eq!(app.state.errors.get("email"), Some(MSG_EMAIL_OR_PHONE));
        assert_eq!(app.state.errors.get("phone"), Some(MSG_EMAIL_OR_PHONE));
        assert_eq!(app.state.errors.get("message"), Some(MSG_MESSAGE_REQUIRED));
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_a_noop() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(mock);
        fill_valid_form(&mut app, "x@y.com");

        app.submit();
        app.submit(); // ignored, one call in flight
        assert_eq!(app.state.submission, SubmissionState::Submitting);
        finish_submission(&mut app).await;
    }

    #[tokio::test]
    async fn test_successful_submit_clears_prior_failure_message() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(mock);
        app.state.submission = SubmissionState::Failed("bounced".to_string());
        fill_valid_form(&mut app, "x@y.com");

        app.submit();
        assert_eq!(app.state.submission, SubmissionState::Submitting);
        assert_eq!(app.state.submission.result_message(), None);
        finish_submission(&mut app).await;
    }

    #[tokio::test]
    async fn test_unstructured_failure_surfaces_generic_message() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(GatewayError::Unavailable));
        let mut app = app_with(mock);
        fill_valid_form(&mut app, "x@y.com");

        app.submit();
        finish_submission(&mut app).await;
        assert_eq!(
            app.state.submission,
            SubmissionState::Failed("Submission failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_revalidates() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit().never();
        let mut app = app_with(mock);
        app.state.submission = SubmissionState::Failed("bounced".to_string());

        // Values are now invalid again, so no new gateway call is made
        app.submit();
        assert!(!app.state.errors.is_empty());
    }

    #[tokio::test]
    async fn test_typing_edits_active_field() {
        let mut app = app_with(MockSubmissionGateway::new());

        app.handle_key(key(KeyCode::Char('J'))).unwrap();
        app.handle_key(key(KeyCode::Char('o'))).unwrap();
        assert_eq!(app.state.form.name.as_text(), "Jo");

        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.state.form.name.as_text(), "J");
    }

    #[tokio::test]
    async fn test_tab_cycles_focus_and_enter_adds_newline_in_message() {
        let mut app = app_with(MockSubmissionGateway::new());

        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
        assert_eq!(app.state.form.active_field_index, 3);
        app.handle_key(key(KeyCode::Char('h'))).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        app.handle_key(key(KeyCode::Char('i'))).unwrap();
        assert_eq!(app.state.form.message.as_text(), "h\ni");
    }

    #[tokio::test]
    async fn test_enter_on_submit_control_submits() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(mock);
        fill_valid_form(&mut app, "x@y.com");

        app.state.form.set_active_field(4);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.submission, SubmissionState::Submitting);
        finish_submission(&mut app).await;
    }

    #[tokio::test]
    async fn test_typing_on_submit_control_is_ignored() {
        let mut app = app_with(MockSubmissionGateway::new());
        app.state.form.set_active_field(4);
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert!(app.state.form.values().name.is_none());
        assert!(app.state.form.message.is_empty());
    }

    #[tokio::test]
    async fn test_esc_quits() {
        let mut app = app_with(MockSubmissionGateway::new());
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_poll_submission_applies_outcome() {
        let mut mock = MockSubmissionGateway::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(mock);
        fill_valid_form(&mut app, "x@y.com");

        app.submit();
        // Let the spawned task run to completion
        tokio::task::yield_now().await;
        app.poll_submission();
        assert!(matches!(
            app.state.submission,
            SubmissionState::Succeeded(_)
        ));
    }
}
