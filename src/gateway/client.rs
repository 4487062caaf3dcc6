//! Simulated submission gateway
//!
//! Timer-based stand-in for a real network call: resolves after a fixed
//! delay, except for one known-bad address which is rejected the way a
//! backend bounce would be.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use super::traits::SubmissionGateway;
use crate::state::FormValues;

/// Default simulated round-trip delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

/// Address the simulated backend rejects
const REJECTED_EMAIL: &str = "neexistujici@email.cz";
const REJECTED_MESSAGE: &str = "Neexistující emailová adresa";

/// Errors a submission can fail with
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend rejected the submission with a message for the user
    #[error("{message}")]
    Rejected { message: String },
    /// The gateway could not be reached at all
    #[error("gateway unavailable")]
    Unavailable,
}

impl GatewayError {
    /// Message shown in the result line. Rejections are shown verbatim;
    /// anything unstructured gets a generic fallback instead of being
    /// silently dropped.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Rejected { message } => message.clone(),
            GatewayError::Unavailable => "Submission failed".to_string(),
        }
    }
}

/// Timer-based gateway used when no real backend exists
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(&self, values: FormValues) -> Result<(), GatewayError> {
        tokio::time::sleep(self.delay).await;

        if values.email.as_deref() == Some(REJECTED_EMAIL) {
            return Err(GatewayError::Rejected {
                message: REJECTED_MESSAGE.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(email: &str) -> FormValues {
        FormValues {
            email: Some(email.to_string()),
            message: "hi".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_resolves_for_normal_address() {
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let result = gateway.submit(values("x@y.com")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_submit_rejects_sentinel_address() {
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let err = gateway
            .submit(values("neexistujici@email.cz"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Neexistující emailová adresa");
    }

    #[tokio::test]
    async fn test_submit_resolves_with_no_email_at_all() {
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let vals = FormValues {
            phone: Some("1234567890".to_string()),
            message: "hi".to_string(),
            ..Default::default()
        };
        assert!(gateway.submit(vals).await.is_ok());
    }

    #[test]
    fn test_unavailable_gets_generic_fallback_message() {
        let err = GatewayError::Unavailable;
        assert_eq!(err.user_message(), "Submission failed");
    }

    #[test]
    fn test_rejected_message_is_verbatim() {
        let err = GatewayError::Rejected {
            message: "bounced".to_string(),
        };
        assert_eq!(err.user_message(), "bounced");
        assert_eq!(err.to_string(), "bounced");
    }
}
